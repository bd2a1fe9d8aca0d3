//! 材料成本

use patch_core::{BaseMaterial, Fixation, PricingConfig};

/// 材料成本計算器
pub struct MaterialCostCalculator;

impl MaterialCostCalculator {
    /// 每平方公尺材料單價：底布 + 襯布（+ 熱熔膠）
    pub fn rate_per_m2(material: &BaseMaterial, fixation: Fixation, config: &PricingConfig) -> f64 {
        let mut rate = material.rates(config).per_m2() + config.interlining_per_m2();

        if fixation.uses_thermo_adhesive() {
            rate += config.thermo_per_m2();
        }

        rate
    }

    /// 材料成本 = 單價 × 上框面積 × (1 + 損耗)
    pub fn calculate(
        material: &BaseMaterial,
        fixation: Fixation,
        loaded_area_m2: f64,
        config: &PricingConfig,
    ) -> f64 {
        Self::rate_per_m2(material, fixation, config)
            * loaded_area_m2
            * (1.0 + config.waste_fraction)
    }
}
