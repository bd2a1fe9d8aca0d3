//! 能源成本

use patch_core::{Machine, PricingConfig};

/// 能源成本計算器
pub struct EnergyCostCalculator;

impl EnergyCostCalculator {
    /// 刺繡時間（小時）
    pub fn stitching_hours(stitch_count: u32, machine: &Machine, config: &PricingConfig) -> f64 {
        let rates = machine.rates(config);
        let minutes = f64::from(stitch_count) / rates.speed_stitches_per_min;
        minutes / 60.0
    }

    /// 能源成本 = 功率 × 時間 × 電價
    pub fn calculate(stitch_count: u32, machine: &Machine, config: &PricingConfig) -> f64 {
        let rates = machine.rates(config);
        let kwh = rates.power_kw * Self::stitching_hours(stitch_count, machine, config);
        kwh * config.energy_tariff_per_kwh
    }
}
