//! 折扣級距模型（數量折扣、訂單金額折扣）

use serde::{Deserialize, Serialize};

use crate::{PricingError, Result};

/// 數量折扣級距
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// 最低數量（正整數）
    pub minimum_quantity: u32,

    /// 折扣（整數百分比 0-100）
    pub discount_percent: f64,
}

impl DiscountTier {
    /// 創建新的折扣級距
    pub fn new(minimum_quantity: u32, discount_percent: f64) -> Self {
        Self {
            minimum_quantity,
            discount_percent,
        }
    }

    /// 驗證級距
    ///
    /// 不檢查級距之間是否重疊或遞增，選取規則在計價時處理。
    pub fn validate(&self) -> Result<()> {
        if self.minimum_quantity == 0 {
            return Err(PricingError::InvalidDiscount(
                "最低數量必須為正整數".to_string(),
            ));
        }
        if !self.discount_percent.is_finite()
            || !(0.0..=100.0).contains(&self.discount_percent)
        {
            return Err(PricingError::InvalidDiscount(format!(
                "折扣必須介於 0 到 100（目前: {}）",
                self.discount_percent
            )));
        }
        Ok(())
    }

    /// 預設級距：10 件 5%、50 件 10%、100 件 15%
    pub fn default_tiers() -> Vec<DiscountTier> {
        vec![
            DiscountTier::new(10, 5.0),
            DiscountTier::new(50, 10.0),
            DiscountTier::new(100, 15.0),
        ]
    }
}

/// 訂單金額折扣級距（套用於購物車總額）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderDiscountTier {
    /// 最低訂單金額
    pub minimum_total: f64,

    /// 折扣（整數百分比 0-100）
    pub discount_percent: f64,
}

impl OrderDiscountTier {
    pub fn new(minimum_total: f64, discount_percent: f64) -> Self {
        Self {
            minimum_total,
            discount_percent,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.minimum_total.is_finite() || self.minimum_total <= 0.0 {
            return Err(PricingError::InvalidDiscount(format!(
                "最低訂單金額必須為正數（目前: {}）",
                self.minimum_total
            )));
        }
        if !self.discount_percent.is_finite()
            || !(0.0..=100.0).contains(&self.discount_percent)
        {
            return Err(PricingError::InvalidDiscount(format!(
                "折扣必須介於 0 到 100（目前: {}）",
                self.discount_percent
            )));
        }
        Ok(())
    }

    /// 預設級距：500 5%、1000 10%、2000 15%、5000 20%
    pub fn default_tiers() -> Vec<OrderDiscountTier> {
        vec![
            OrderDiscountTier::new(500.0, 5.0),
            OrderDiscountTier::new(1000.0, 10.0),
            OrderDiscountTier::new(2000.0, 15.0),
            OrderDiscountTier::new(5000.0, 20.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_tiers() {
        let tiers = DiscountTier::default_tiers();
        assert_eq!(tiers.len(), 3);
        assert!(tiers.iter().all(|t| t.validate().is_ok()));
    }

    #[rstest]
    #[case(0, 5.0)]
    #[case(10, -1.0)]
    #[case(10, 100.5)]
    #[case(10, f64::NAN)]
    fn test_invalid_tiers(#[case] minimum_quantity: u32, #[case] discount_percent: f64) {
        let tier = DiscountTier::new(minimum_quantity, discount_percent);
        assert!(matches!(
            tier.validate(),
            Err(PricingError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_boundary_percent_is_valid() {
        assert!(DiscountTier::new(1, 0.0).validate().is_ok());
        assert!(DiscountTier::new(1, 100.0).validate().is_ok());
    }

    #[test]
    fn test_default_order_tiers() {
        let tiers = OrderDiscountTier::default_tiers();
        assert_eq!(tiers.len(), 4);
        assert!(tiers.iter().all(|t| t.validate().is_ok()));
    }

    #[rstest]
    #[case(0.0, 5.0)]
    #[case(-10.0, 5.0)]
    #[case(f64::INFINITY, 5.0)]
    #[case(500.0, 120.0)]
    fn test_invalid_order_tiers(#[case] minimum_total: f64, #[case] discount_percent: f64) {
        let tier = OrderDiscountTier::new(minimum_total, discount_percent);
        assert!(matches!(
            tier.validate(),
            Err(PricingError::InvalidDiscount(_))
        ));
    }
}
