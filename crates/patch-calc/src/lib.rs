//! # Patch Pricing Engine
//!
//! 布章計價引擎：面積 → 材料 → 繡線 → 能源 → 技術費 → 固定方式 → 毛利 → 進位 → 數量折扣 → 版帶費

pub mod area;
pub mod calculator;
pub mod discount;
pub mod energy;
pub mod fees;
pub mod materials;
pub mod rounding;
pub mod thread;

use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use area::PatchArea;
pub use calculator::PricingCalculator;

/// 計價結果（金額單位與配置相同，非分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// 布章面積（cm²）
    pub patch_area_cm2: f64,

    /// 含耳邊（及損耗膨脹）的上框面積（m²）
    pub loaded_area_m2: f64,

    /// 材料成本
    pub materials_cost: f64,

    /// 繡線成本
    pub thread_cost: f64,

    /// 能源成本
    pub energy_cost: f64,

    /// 針數技術費
    pub technical_fee: f64,

    /// 固定方式附加費
    pub fixation_surcharge: f64,

    /// 單件生產成本（以上五項合計）
    pub production_cost: f64,

    /// 實際毛利（小數，含網路加成）
    pub effective_margin: f64,

    /// 進位前建議售價
    pub suggested_price: f64,

    /// 進位後單價
    pub final_unit_price: f64,

    /// 套用的折扣（整數百分比）
    pub discount_percent: f64,

    /// 折扣後單價
    pub unit_price_after_discount: f64,

    /// 版帶費前總額
    pub pre_die_fee_total: f64,

    /// 實收版帶費（免收時為 0）
    pub die_fee_charged: f64,

    /// 訂單總額
    pub grand_total: f64,

    /// 技術費是否觸頂
    pub technical_fee_capped: bool,

    /// 版帶費是否免收
    pub die_fee_waived: bool,

    /// 毛利是否低於最低毛利
    pub margin_below_minimum: bool,

    /// 警告信息
    pub warnings: Vec<PricingWarning>,
}

impl PricingResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: PricingWarning) {
        self.warnings.push(warning);
    }
}

/// 計價警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingWarning {
    pub code: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PricingWarning {
    pub fn new(code: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            code,
            message,
            severity,
        }
    }

    pub fn info(code: String, message: String) -> Self {
        Self::new(code, message, WarningSeverity::Info)
    }

    pub fn warning(code: String, message: String) -> Self {
        Self::new(code, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
