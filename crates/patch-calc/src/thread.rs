//! 繡線成本

use patch_core::PricingConfig;

/// 繡線成本計算器
pub struct ThreadCostCalculator;

impl ThreadCostCalculator {
    /// 總耗線長度（公尺）= 針數耗線 + 換色損耗
    pub fn thread_length_m(stitch_count: u32, color_count: u32, config: &PricingConfig) -> f64 {
        let stitching = f64::from(stitch_count) * (config.thread_per_1000_stitches_m / 1000.0);
        let color_changes = f64::from(color_count) * config.thread_loss_per_color_m;
        stitching + color_changes
    }

    /// 繡線成本
    pub fn calculate(stitch_count: u32, color_count: u32, config: &PricingConfig) -> f64 {
        Self::thread_length_m(stitch_count, color_count, config) * config.thread_cost_per_m()
    }
}
