//! 技術費、固定方式附加費與版帶費

use patch_core::{Fixation, PricingConfig};

/// 技術費結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnicalFee {
    pub amount: f64,
    /// 是否被上限截斷
    pub capped: bool,
}

/// 版帶費結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieFee {
    /// 實收金額（免收時為 0）
    pub charged: f64,
    pub waived: bool,
}

/// 費用計算器
pub struct FeeCalculator;

impl FeeCalculator {
    /// 每千針技術費，超過上限時截斷
    pub fn technical_fee(stitch_count: u32, config: &PricingConfig) -> TechnicalFee {
        let raw = f64::from(stitch_count) / 1000.0 * config.technical_fee_per_1000;

        if raw > config.technical_fee_ceiling {
            TechnicalFee {
                amount: config.technical_fee_ceiling,
                capped: true,
            }
        } else {
            TechnicalFee {
                amount: raw,
                capped: false,
            }
        }
    }

    /// 固定方式附加費
    pub fn fixation_surcharge(fixation: Fixation, config: &PricingConfig) -> f64 {
        fixation.surcharge(config)
    }

    /// 版帶費：訂單金額達門檻（含等於）時免收，否則每張訂單收一次
    pub fn die_fee(pre_die_fee_total: f64, config: &PricingConfig) -> DieFee {
        if pre_die_fee_total >= config.die_fee_waiver_threshold {
            DieFee {
                charged: 0.0,
                waived: true,
            }
        } else {
            DieFee {
                charged: config.die_fee,
                waived: false,
            }
        }
    }
}
