//! 單一繡框格狀排版

use patch_core::Hoop;

use crate::FitResult;

/// 單一方向的格狀排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFit {
    pub per_row: u32,
    pub per_column: u32,
}

impl GridFit {
    /// 計算格狀排列：可繡寬 / (件寬 + 間距)，可繡高 / (件高 + 間距)，皆向下取整
    pub fn compute(
        usable_width: f64,
        usable_height: f64,
        piece_width: f64,
        piece_height: f64,
        margin: f64,
    ) -> Self {
        Self {
            per_row: whole_fits(usable_width, piece_width + margin),
            per_column: whole_fits(usable_height, piece_height + margin),
        }
    }

    pub fn total(&self) -> u32 {
        self.per_row * self.per_column
    }
}

/// floor(length / step)；非正或非有限結果視為 0
fn whole_fits(length: f64, step: f64) -> u32 {
    let count = (length / step).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}

/// 繡框排版計算器
pub struct HoopFitter;

impl HoopFitter {
    /// 計算單一繡框可放件數
    ///
    /// 分別試算原方向與旋轉 90°，旋轉後件數嚴格較多時才採用旋轉。
    pub fn fit(
        patch_width: f64,
        patch_height: f64,
        hoop: &Hoop,
        inter_piece_margin: f64,
    ) -> FitResult {
        let upright = GridFit::compute(
            hoop.usable_width,
            hoop.usable_height,
            patch_width,
            patch_height,
            inter_piece_margin,
        );
        let rotated = GridFit::compute(
            hoop.usable_width,
            hoop.usable_height,
            patch_height,
            patch_width,
            inter_piece_margin,
        );

        let use_rotation = rotated.total() > upright.total();
        let chosen = if use_rotation { rotated } else { upright };
        let total_pieces = chosen.total();

        let usable_area = hoop.usable_area();
        let used_area = f64::from(total_pieces) * (patch_width * patch_height);
        let utilization_percent = used_area / usable_area * 100.0;
        let wasted_area = usable_area - used_area;

        FitResult {
            hoop: hoop.clone(),
            pieces_per_row: chosen.per_row,
            pieces_per_column: chosen.per_column,
            total_pieces,
            rotated: use_rotation,
            usable_area,
            used_area,
            utilization_percent,
            wasted_area,
        }
    }
}
