//! 定點編碼（金額、百分比、尺寸 × 100 存為整數）

use patch_core::{PricingError, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// 儲存倍率
pub const FIXED_POINT_SCALE: i64 = 100;

/// 小數 → 定點整數（四捨五入，.5 遠離 0）
pub fn encode_fixed(field: &str, value: f64) -> Result<i64> {
    let invalid = || PricingError::InvalidNumber {
        field: field.to_string(),
    };

    let decimal = Decimal::from_f64(value).ok_or_else(invalid)?;
    (decimal * Decimal::from(FIXED_POINT_SCALE))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(invalid)
}

/// 定點整數 → Decimal（兩位小數）
pub fn decode_fixed(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// 定點整數 → f64
pub fn decode_fixed_f64(value: i64) -> f64 {
    decode_fixed(value).to_f64().unwrap_or(value as f64 / FIXED_POINT_SCALE as f64)
}
