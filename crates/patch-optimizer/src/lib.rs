//! # Patch Optimizer
//!
//! 繡框排版最佳化（格狀排列、90° 旋轉、最佳繡框選取）

pub mod fit;
pub mod selection;

use patch_core::Hoop;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use fit::HoopFitter;
pub use selection::HoopSelector;

/// 單一繡框的排版結果（面積單位：cm²）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// 繡框
    pub hoop: Hoop,

    /// 每列件數
    pub pieces_per_row: u32,

    /// 每欄件數
    pub pieces_per_column: u32,

    /// 每框總件數
    pub total_pieces: u32,

    /// 是否旋轉 90°
    pub rotated: bool,

    /// 可繡面積
    pub usable_area: f64,

    /// 實際使用面積（只計布章本身，不含間距）
    pub used_area: f64,

    /// 使用率（%）
    pub utilization_percent: f64,

    /// 浪費面積
    pub wasted_area: f64,
}

impl FitResult {
    /// 是否至少放得下一件
    pub fn fits_any(&self) -> bool {
        self.total_pieces >= 1
    }

    /// 生產指定數量所需的繡框次數；放不下任何一件時為 None
    pub fn hoops_needed(&self, quantity: u32) -> Option<u32> {
        if self.total_pieces == 0 {
            return None;
        }
        Some(quantity.div_ceil(self.total_pieces))
    }
}
