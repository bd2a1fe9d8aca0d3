//! # Patch Pricing
//!
//! 刺繡布章計價與繡框排版最佳化
//!
//! - `patch_core`：規格、配置、目錄、錯誤類型
//! - `patch_calc`：計價引擎
//! - `patch_optimizer`：繡框排版與選取
//! - `patch_quote`：報價組裝、購物車與定點儲存記錄

pub use patch_calc;
pub use patch_core;
pub use patch_optimizer;
pub use patch_quote;

pub use patch_calc::{PricingCalculator, PricingResult, PricingWarning, WarningSeverity};
pub use patch_core::{
    BaseMaterial, Catalog, DiscountTier, Fixation, Hoop, Machine, OrderDiscountTier, PatchSpec,
    PricingConfig, PricingError, Result, Shape, WorkMode,
};
pub use patch_optimizer::{FitResult, HoopFitter, HoopSelector};
pub use patch_quote::{CartSummary, QuoteCart, QuoteRecord, QuoteResponse, Quoter};
