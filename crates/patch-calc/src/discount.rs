//! 折扣級距選取

use patch_core::{DiscountTier, OrderDiscountTier};

/// 數量折扣選取器
pub struct DiscountSelector;

impl DiscountSelector {
    /// 選取門檻最高且不超過數量的級距
    ///
    /// 級距依門檻遞減排序後取第一個符合者；同門檻時保留輸入順序中較前者。
    /// 不修改呼叫端傳入的級距。
    pub fn select(tiers: &[DiscountTier], quantity: u32) -> Option<DiscountTier> {
        let mut sorted: Vec<DiscountTier> = tiers.to_vec();
        sorted.sort_by(|a, b| b.minimum_quantity.cmp(&a.minimum_quantity));

        sorted
            .into_iter()
            .find(|tier| quantity >= tier.minimum_quantity)
    }

    /// 套用的折扣百分比；無符合級距時為 0
    pub fn discount_percent(tiers: &[DiscountTier], quantity: u32) -> f64 {
        Self::select(tiers, quantity)
            .map(|tier| tier.discount_percent)
            .unwrap_or(0.0)
    }

    /// 選取門檻最高且不超過訂單金額的級距（同門檻時取較前者）
    pub fn select_for_total(
        tiers: &[OrderDiscountTier],
        total: f64,
    ) -> Option<OrderDiscountTier> {
        let mut sorted: Vec<OrderDiscountTier> = tiers.to_vec();
        sorted.sort_by(|a, b| b.minimum_total.total_cmp(&a.minimum_total));

        sorted.into_iter().find(|tier| total >= tier.minimum_total)
    }

    /// 訂單金額折扣百分比；無符合級距時為 0
    pub fn order_discount_percent(tiers: &[OrderDiscountTier], total: f64) -> f64 {
        Self::select_for_total(tiers, total)
            .map(|tier| tier.discount_percent)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(9, 0.0)]
    #[case(10, 5.0)]
    #[case(49, 5.0)]
    #[case(50, 10.0)]
    #[case(99, 10.0)]
    #[case(100, 15.0)]
    #[case(5000, 15.0)]
    fn test_discount_selection(#[case] quantity: u32, #[case] expected: f64) {
        let tiers = DiscountTier::default_tiers();
        assert_eq!(DiscountSelector::discount_percent(&tiers, quantity), expected);
    }

    #[test]
    fn test_highest_threshold_wins_over_larger_discount() {
        // 門檻最高者優先，即使較低門檻的折扣更大
        let tiers = vec![DiscountTier::new(10, 20.0), DiscountTier::new(50, 5.0)];
        assert_eq!(DiscountSelector::discount_percent(&tiers, 60), 5.0);
    }

    #[test]
    fn test_duplicate_threshold_keeps_first_listed() {
        let tiers = vec![DiscountTier::new(50, 10.0), DiscountTier::new(50, 12.0)];
        assert_eq!(DiscountSelector::discount_percent(&tiers, 60), 10.0);

        let tiers = vec![DiscountTier::new(50, 12.0), DiscountTier::new(50, 10.0)];
        assert_eq!(DiscountSelector::discount_percent(&tiers, 60), 12.0);
    }

    #[test]
    fn test_unsorted_input_is_not_mutated() {
        let tiers = vec![
            DiscountTier::new(100, 15.0),
            DiscountTier::new(10, 5.0),
            DiscountTier::new(50, 10.0),
        ];
        let snapshot = tiers.clone();

        assert_eq!(DiscountSelector::discount_percent(&tiers, 75), 10.0);
        assert_eq!(tiers, snapshot);
    }

    #[test]
    fn test_empty_tiers() {
        assert_eq!(DiscountSelector::select(&[], 100), None);
        assert_eq!(DiscountSelector::discount_percent(&[], 100), 0.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(499.99, 0.0)]
    #[case(500.0, 5.0)]
    #[case(999.99, 5.0)]
    #[case(1000.0, 10.0)]
    #[case(1999.99, 10.0)]
    #[case(2000.0, 15.0)]
    #[case(4999.99, 15.0)]
    #[case(5000.0, 20.0)]
    #[case(80000.0, 20.0)]
    fn test_order_discount_selection(#[case] total: f64, #[case] expected: f64) {
        let tiers = OrderDiscountTier::default_tiers();
        assert_eq!(DiscountSelector::order_discount_percent(&tiers, total), expected);
    }
}
