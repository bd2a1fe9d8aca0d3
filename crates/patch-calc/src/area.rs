//! 面積計算

use patch_core::{Shape, WorkMode};
use std::f64::consts::PI;

/// cm² → m²
const CM2_PER_M2: f64 = 10_000.0;

/// 面積計算結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchArea {
    /// 布章實際面積（cm²）
    pub patch_area_cm2: f64,
    /// 含耳邊的上框面積（cm²）
    pub loaded_area_cm2: f64,
    /// 計入客供件損耗後的上框面積（m²），材料成本以此為準
    pub loaded_area_m2: f64,
}

/// 面積計算器
pub struct AreaCalculator;

impl AreaCalculator {
    /// 計算布章面積與上框面積
    ///
    /// 耳邊在每個方向各加一次；圓形以外接正方形計算上框面積。
    pub fn calculate(shape: &Shape, ear_cm: f64, work_mode: &WorkMode) -> PatchArea {
        let (patch_area_cm2, loaded_area_cm2) = match *shape {
            Shape::Rectangular {
                long_side,
                short_side,
            } => (
                long_side * short_side,
                (long_side + ear_cm) * (short_side + ear_cm),
            ),
            Shape::Circular { diameter } => {
                let radius = diameter / 2.0;
                (PI * radius * radius, (diameter + ear_cm).powi(2))
            }
        };

        let loaded_area_m2 = loaded_area_cm2 / CM2_PER_M2 * work_mode.area_factor();

        PatchArea {
            patch_area_cm2,
            loaded_area_cm2,
            loaded_area_m2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rectangular_area() {
        let shape = Shape::Rectangular {
            long_side: 12.0,
            short_side: 9.0,
        };
        let area = AreaCalculator::calculate(&shape, 2.0, &WorkMode::Patches);

        assert!((area.patch_area_cm2 - 108.0).abs() < EPS);
        assert!((area.loaded_area_cm2 - 154.0).abs() < EPS);
        assert!((area.loaded_area_m2 - 0.0154).abs() < EPS);
    }

    #[test]
    fn test_circular_area_uses_bounding_square() {
        let shape = Shape::Circular { diameter: 8.0 };
        let area = AreaCalculator::calculate(&shape, 2.0, &WorkMode::Patches);

        assert!((area.patch_area_cm2 - PI * 16.0).abs() < EPS);
        assert!((area.loaded_area_cm2 - 100.0).abs() < EPS);
        assert!((area.loaded_area_m2 - 0.01).abs() < EPS);
    }

    #[test]
    fn test_customer_piece_inflates_loaded_area() {
        let shape = Shape::Rectangular {
            long_side: 12.0,
            short_side: 9.0,
        };
        let mode = WorkMode::CustomerPiece {
            material_loss_percent: 10.0,
        };
        let area = AreaCalculator::calculate(&shape, 2.0, &mode);

        // cm² 不受影響，只有計價用的 m² 膨脹
        assert!((area.loaded_area_cm2 - 154.0).abs() < EPS);
        assert!((area.loaded_area_m2 - 0.01694).abs() < EPS);
    }
}
