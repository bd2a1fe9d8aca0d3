//! # Patch Quote
//!
//! 報價組裝與儲存邊界：合併計價與繡框建議、多品項購物車，並以定點整數（× 100）編碼儲存記錄

pub mod cart;
pub mod fixed_point;
pub mod quoter;
pub mod record;

// Re-export 主要類型
pub use cart::{CartItem, CartSummary, QuoteCart};
pub use fixed_point::{decode_fixed, decode_fixed_f64, encode_fixed, FIXED_POINT_SCALE};
pub use quoter::{QuoteResponse, Quoter};
pub use record::{QuoteRecord, QuoteSummary};
