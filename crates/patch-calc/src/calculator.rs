//! 布章計價主計算器

use patch_core::{ensure_finite, DiscountTier, PatchSpec, PricingConfig};

use crate::area::AreaCalculator;
use crate::discount::DiscountSelector;
use crate::energy::EnergyCostCalculator;
use crate::fees::FeeCalculator;
use crate::materials::MaterialCostCalculator;
use crate::rounding::round_up_to_unit;
use crate::thread::ThreadCostCalculator;
use crate::{PricingResult, PricingWarning};

/// 布章計價計算器
///
/// 持有配置與折扣級距的快照；每次計價互不影響。
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    /// 定價配置
    config: PricingConfig,

    /// 數量折扣級距（已過濾為啟用中的項目）
    discount_tiers: Vec<DiscountTier>,
}

impl PricingCalculator {
    /// 創建新的計價計算器
    pub fn new(config: PricingConfig, discount_tiers: Vec<DiscountTier>) -> Self {
        Self {
            config,
            discount_tiers,
        }
    }

    /// 計價入口
    pub fn compute_price(&self, spec: &PatchSpec) -> patch_core::Result<PricingResult> {
        compute_price(spec, &self.config, &self.discount_tiers)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// 獲取折扣級距引用
    pub fn discount_tiers(&self) -> &[DiscountTier] {
        &self.discount_tiers
    }
}

/// 計價主流程（純函數）
///
/// 只在輸入含 NaN / 無限值時失敗；業務規則（正數尺寸、數量）由呼叫端先行驗證。
pub fn compute_price(
    spec: &PatchSpec,
    config: &PricingConfig,
    discount_tiers: &[DiscountTier],
) -> patch_core::Result<PricingResult> {
    for (field, value) in spec.numeric_fields() {
        ensure_finite(field, value)?;
    }

    tracing::info!(
        "開始計價：{} {} 針 {} 色，數量 {}",
        spec.shape.code(),
        spec.stitch_count,
        spec.color_count,
        spec.quantity
    );

    // Step 1-2: 面積（含耳邊與客供件損耗）
    let area = AreaCalculator::calculate(&spec.shape, config.ear_cm, &spec.work_mode);
    tracing::debug!(
        "Step 1: 布章面積 {:.2} cm²，上框面積 {:.6} m²",
        area.patch_area_cm2,
        area.loaded_area_m2
    );

    // Step 3: 材料
    let materials_cost = MaterialCostCalculator::calculate(
        &spec.base_material,
        spec.fixation,
        area.loaded_area_m2,
        config,
    );
    tracing::debug!("Step 3: 材料成本 {:.4}（{}）", materials_cost, spec.base_material.label());

    // Step 4: 繡線
    let thread_cost = ThreadCostCalculator::calculate(spec.stitch_count, spec.color_count, config);
    tracing::debug!("Step 4: 繡線成本 {:.4}", thread_cost);

    // Step 5: 能源
    let energy_cost = EnergyCostCalculator::calculate(spec.stitch_count, &spec.machine, config);
    tracing::debug!("Step 5: 能源成本 {:.4}（{}）", energy_cost, spec.machine.label());

    // Step 6: 技術費
    let technical = FeeCalculator::technical_fee(spec.stitch_count, config);
    tracing::debug!(
        "Step 6: 技術費 {:.4}，觸頂: {}",
        technical.amount,
        technical.capped
    );

    // Step 7: 固定方式
    let fixation_surcharge = FeeCalculator::fixation_surcharge(spec.fixation, config);
    tracing::debug!("Step 7: 固定附加費 {:.2}（{}）", fixation_surcharge, spec.fixation.code());

    // Step 8: 單件生產成本
    let production_cost =
        materials_cost + thread_cost + energy_cost + technical.amount + fixation_surcharge;

    // Step 9: 毛利與網路加成
    let mut effective_margin = spec.margin_percent / 100.0;
    if spec.online_sale {
        effective_margin += config.online_extra_margin;
    }
    let suggested_price = ensure_finite(
        "suggested_price",
        production_cost * (1.0 + effective_margin),
    )?;
    tracing::debug!(
        "Step 9: 生產成本 {:.4}，毛利 {:.2}，建議售價 {:.4}",
        production_cost,
        effective_margin,
        suggested_price
    );

    // Step 10: 進位
    let final_unit_price = round_up_to_unit(suggested_price, config.rounding_unit);

    // Step 11: 數量折扣
    let discount_percent = DiscountSelector::discount_percent(discount_tiers, spec.quantity);
    let unit_price_after_discount = final_unit_price * (1.0 - discount_percent / 100.0);
    let pre_die_fee_total = unit_price_after_discount * f64::from(spec.quantity);
    tracing::debug!(
        "Step 11: 單價 {:.2}，折扣 {}%，小計 {:.2}",
        final_unit_price,
        discount_percent,
        pre_die_fee_total
    );

    // Step 12: 版帶費
    let die_fee = FeeCalculator::die_fee(pre_die_fee_total, config);
    let grand_total = pre_die_fee_total + die_fee.charged;

    let margin_below_minimum = effective_margin < config.minimum_margin;

    let mut result = PricingResult {
        patch_area_cm2: area.patch_area_cm2,
        loaded_area_m2: area.loaded_area_m2,
        materials_cost,
        thread_cost,
        energy_cost,
        technical_fee: technical.amount,
        fixation_surcharge,
        production_cost,
        effective_margin,
        suggested_price,
        final_unit_price,
        discount_percent,
        unit_price_after_discount,
        pre_die_fee_total,
        die_fee_charged: die_fee.charged,
        grand_total,
        technical_fee_capped: technical.capped,
        die_fee_waived: die_fee.waived,
        margin_below_minimum,
        warnings: Vec::new(),
    };

    if margin_below_minimum {
        result.add_warning(PricingWarning::warning(
            "margin_below_minimum".to_string(),
            format!(
                "毛利 {:.1}% 低於最低毛利 {:.1}%",
                effective_margin * 100.0,
                config.minimum_margin * 100.0
            ),
        ));
    }

    if technical.capped {
        result.add_warning(PricingWarning::info(
            "technical_fee_capped".to_string(),
            format!("技術費已達上限 {:.2}", config.technical_fee_ceiling),
        ));
    }

    tracing::info!(
        "計價完成：單價 {:.2}，總額 {:.2}，版帶費免收: {}",
        result.final_unit_price,
        result.grand_total,
        result.die_fee_waived
    );

    Ok(result)
}
