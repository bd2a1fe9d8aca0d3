//! 售價進位

/// 向上進位到 `unit` 的倍數
///
/// `unit` 必須大於 0（由配置驗證保證）。
pub fn round_up_to_unit(value: f64, unit: f64) -> f64 {
    (value / unit).ceil() * unit
}
