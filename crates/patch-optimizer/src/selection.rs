//! 最佳繡框選取

use patch_core::Hoop;

use crate::fit::HoopFitter;
use crate::FitResult;

/// 使用率相差小於此值（百分點）時視為相同，改比浪費面積
pub const UTILIZATION_TIE_THRESHOLD: f64 = 1.0;

/// 繡框選取器
pub struct HoopSelector;

impl HoopSelector {
    /// 以使用率為目標選取繡框
    ///
    /// 依目錄順序逐一比較：使用率相差小於 1 個百分點時取浪費面積較小者，
    /// 否則取使用率較高者。目錄為空或沒有繡框放得下一件時回傳 None。
    pub fn best_for_shape(
        patch_width: f64,
        patch_height: f64,
        hoops: &[Hoop],
        inter_piece_margin: f64,
    ) -> Option<FitResult> {
        if hoops.is_empty() {
            return None;
        }

        let candidates =
            Self::fittable_candidates(patch_width, patch_height, hoops, inter_piece_margin);
        tracing::debug!(
            "繡框選取（使用率）：{} 個繡框，{} 個可用",
            hoops.len(),
            candidates.len()
        );

        let best = candidates.into_iter().reduce(|best, candidate| {
            if Self::prefer_for_shape(&candidate, &best) {
                candidate
            } else {
                best
            }
        });

        if let Some(fit) = &best {
            tracing::info!(
                "建議繡框 {}：每框 {} 件，使用率 {:.1}%",
                fit.hoop.name,
                fit.total_pieces,
                fit.utilization_percent
            );
        }

        best
    }

    /// 以繡框次數為目標選取繡框
    ///
    /// 所需次數 = ceil(數量 / 每框件數)，取最少者；次數相同時取使用率較高者。
    /// 數量為 0 或目錄為空時直接回傳 None。
    pub fn best_for_quantity(
        patch_width: f64,
        patch_height: f64,
        quantity: u32,
        hoops: &[Hoop],
        inter_piece_margin: f64,
    ) -> Option<FitResult> {
        if quantity == 0 || hoops.is_empty() {
            return None;
        }

        let candidates =
            Self::fittable_candidates(patch_width, patch_height, hoops, inter_piece_margin);
        tracing::debug!(
            "繡框選取（數量 {}）：{} 個繡框，{} 個可用",
            quantity,
            hoops.len(),
            candidates.len()
        );

        let best = candidates.into_iter().reduce(|best, candidate| {
            let needed_best = quantity.div_ceil(best.total_pieces);
            let needed_candidate = quantity.div_ceil(candidate.total_pieces);

            if needed_candidate < needed_best
                || (needed_candidate == needed_best
                    && candidate.utilization_percent > best.utilization_percent)
            {
                candidate
            } else {
                best
            }
        });

        if let Some(fit) = &best {
            tracing::info!(
                "建議繡框 {}：每框 {} 件，需 {} 框",
                fit.hoop.name,
                fit.total_pieces,
                quantity.div_ceil(fit.total_pieces)
            );
        }

        best
    }

    /// 計算所有繡框並排除放不下任何一件者
    fn fittable_candidates(
        patch_width: f64,
        patch_height: f64,
        hoops: &[Hoop],
        inter_piece_margin: f64,
    ) -> Vec<FitResult> {
        hoops
            .iter()
            .map(|hoop| HoopFitter::fit(patch_width, patch_height, hoop, inter_piece_margin))
            .filter(FitResult::fits_any)
            .collect()
    }

    /// candidate 是否優於目前最佳
    fn prefer_for_shape(candidate: &FitResult, best: &FitResult) -> bool {
        let diff = (candidate.utilization_percent - best.utilization_percent).abs();
        if diff < UTILIZATION_TIE_THRESHOLD {
            candidate.wasted_area < best.wasted_area
        } else {
            candidate.utilization_percent > best.utilization_percent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hoop(name: &str, usable_width: f64, usable_height: f64) -> Hoop {
        Hoop::new(
            name.to_string(),
            usable_width + 0.5,
            usable_height + 0.5,
            usable_width,
            usable_height,
        )
    }

    #[test]
    fn test_empty_catalog() {
        assert!(HoopSelector::best_for_shape(5.0, 5.0, &[], 0.5).is_none());
        assert!(HoopSelector::best_for_quantity(5.0, 5.0, 10, &[], 0.5).is_none());
    }

    #[test]
    fn test_zero_quantity() {
        let hoops = vec![hoop("A", 10.0, 10.0)];
        assert!(HoopSelector::best_for_quantity(5.0, 5.0, 0, &hoops, 0.0).is_none());
    }

    #[test]
    fn test_nothing_fits() {
        let hoops = vec![hoop("A", 4.0, 4.0), hoop("B", 6.0, 3.0)];
        assert!(HoopSelector::best_for_shape(8.0, 8.0, &hoops, 0.0).is_none());
        assert!(HoopSelector::best_for_quantity(8.0, 8.0, 3, &hoops, 0.0).is_none());
    }

    #[test]
    fn test_highest_utilization_wins() {
        // B: 4 件 64 / 100 = 64%；A: 4 件 64 / 64 = 100%
        let hoops = vec![hoop("B", 10.0, 10.0), hoop("A", 8.0, 8.0)];
        let best = HoopSelector::best_for_shape(4.0, 4.0, &hoops, 0.0).unwrap();
        assert_eq!(best.hoop.name, "A");
        assert!((best.utilization_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_near_equal_utilization_prefers_lower_waste() {
        // TwoPieces: 32 / 39.0 = 82.05%，浪費 7.0
        // OnePiece:  16 / 19.6 = 81.63%，浪費 3.6
        let two = hoop("TwoPieces", 8.0, 4.875);
        let one = hoop("OnePiece", 4.0, 4.9);

        let best =
            HoopSelector::best_for_shape(4.0, 4.0, &[two.clone(), one.clone()], 0.0).unwrap();
        assert_eq!(best.hoop.name, "OnePiece");

        let best = HoopSelector::best_for_shape(4.0, 4.0, &[one, two], 0.0).unwrap();
        assert_eq!(best.hoop.name, "OnePiece");
    }

    #[test]
    fn test_utilization_gap_over_threshold_ignores_waste() {
        // TwoPieces: 82.05%，浪費 7.0；OnePiece: 16 / 20 = 80%，浪費 4.0
        let two = hoop("TwoPieces", 8.0, 4.875);
        let one = hoop("OnePiece", 4.0, 5.0);
        let best = HoopSelector::best_for_shape(4.0, 4.0, &[one, two], 0.0).unwrap();
        assert_eq!(best.hoop.name, "TwoPieces");
    }

    /// 4×4 件、無間距：Small 1 件 90.7%，Medium 4 件 88.6%，Large 9 件 79.0%
    fn graded_hoops() -> Vec<Hoop> {
        vec![
            hoop("Small", 4.2, 4.2),
            hoop("Medium", 8.5, 8.5),
            hoop("Large", 13.5, 13.5),
        ]
    }

    #[rstest]
    #[case(1, "Small")]
    #[case(4, "Medium")]
    #[case(9, "Large")]
    #[case(100, "Large")]
    fn test_quantity_minimises_hoop_count(#[case] quantity: u32, #[case] expected: &str) {
        let best =
            HoopSelector::best_for_quantity(4.0, 4.0, quantity, &graded_hoops(), 0.0).unwrap();
        assert_eq!(best.hoop.name, expected);
    }

    #[test]
    fn test_quantity_tie_prefers_higher_utilization() {
        // 數量 4：Medium 與 Large 都只需 1 框，Medium 使用率較高
        let best = HoopSelector::best_for_quantity(4.0, 4.0, 4, &graded_hoops(), 0.0).unwrap();
        assert_eq!(best.hoop.name, "Medium");
        assert_eq!(best.hoops_needed(4), Some(1));
    }

    #[test]
    fn test_objectives_can_disagree() {
        let hoops = graded_hoops();
        let by_shape = HoopSelector::best_for_shape(4.0, 4.0, &hoops, 0.0).unwrap();
        let by_quantity = HoopSelector::best_for_quantity(4.0, 4.0, 20, &hoops, 0.0).unwrap();

        assert_eq!(by_shape.hoop.name, "Small");
        assert_eq!(by_quantity.hoop.name, "Large");
        assert_eq!(by_quantity.hoops_needed(20), Some(3));
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let hoops = Hoop::default_catalog();
        let snapshot = hoops.clone();
        let _ = HoopSelector::best_for_shape(5.0, 5.0, &hoops, 0.5);
        let _ = HoopSelector::best_for_quantity(5.0, 5.0, 10, &hoops, 0.5);
        assert_eq!(hoops, snapshot);
    }
}
