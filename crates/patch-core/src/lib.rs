//! # Patch Core
//!
//! 核心資料模型與類型定義（定價配置、布章規格、繡框、折扣級距、動態目錄）

pub mod catalog;
pub mod config;
pub mod discount;
pub mod hoop;
pub mod patch;

// Re-export 主要類型
pub use catalog::{Catalog, MachineProfile, MaterialProfile};
pub use config::{MachineRates, MaterialRates, PricingConfig};
pub use discount::{DiscountTier, OrderDiscountTier};
pub use hoop::{Hoop, HoopId};
pub use patch::{BaseMaterial, Fixation, Machine, PatchSpec, Shape, WorkMode};

/// 定價錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("無效的數值輸入: {field}")]
    InvalidNumber { field: String },

    #[error("無效的定價配置: {0}")]
    InvalidConfig(String),

    #[error("無效的繡框資料: {0}")]
    InvalidHoop(String),

    #[error("無效的數量折扣: {0}")]
    InvalidDiscount(String),

    #[error("找不到目錄項目: {0}")]
    UnknownCatalogEntry(String),

    #[error("購物車中沒有此項目: {0}")]
    UnknownCartItem(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

/// 檢查數值是否為有限值（非 NaN、非無限）
pub fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::InvalidNumber {
            field: field.to_string(),
        })
    }
}
