//! 多品項購物車與訂單金額折扣

use patch_calc::discount::DiscountSelector;
use patch_core::{OrderDiscountTier, PatchSpec, PricingError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fixed_point::{decode_fixed_f64, encode_fixed};
use crate::quoter::{QuoteResponse, Quoter};

/// 購物車品項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub spec: PatchSpec,
    pub response: QuoteResponse,
}

impl CartItem {
    /// 品項生產成本（單件成本 × 數量）
    pub fn total_cost(&self) -> f64 {
        self.response.pricing.production_cost * f64::from(self.spec.quantity)
    }

    /// 品項售價（含數量折扣與版帶費）
    pub fn total_price(&self) -> f64 {
        self.response.pricing.grand_total
    }
}

/// 購物車彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u32,
    pub total_cost: f64,
    pub total_price: f64,

    /// 訂單金額折扣（整數百分比）
    pub discount_percent: f64,

    /// 折扣金額（四捨五入到分）
    pub discount_amount: f64,
    pub discounted_total: f64,

    /// 毛利金額 = 折扣後總額 - 總成本
    pub margin_amount: f64,

    /// 毛利率（% of 成本）；總成本為 0 時為 0
    pub margin_percent: f64,
}

impl CartSummary {
    /// 由總成本與總售價計算折扣與整體毛利
    pub fn from_totals(
        total_cost: f64,
        total_price: f64,
        tiers: &[OrderDiscountTier],
    ) -> Result<Self> {
        let discount_percent = DiscountSelector::order_discount_percent(tiers, total_price);
        let discount_cents =
            encode_fixed("discount_amount", total_price * discount_percent / 100.0)?;
        let discount_amount = decode_fixed_f64(discount_cents);

        let discounted_total = total_price - discount_amount;
        let margin_amount = discounted_total - total_cost;
        let margin_percent = if total_cost > 0.0 {
            margin_amount / total_cost * 100.0
        } else {
            0.0
        };

        Ok(Self {
            item_count: 0,
            total_quantity: 0,
            total_cost,
            total_price,
            discount_percent,
            discount_amount,
            discounted_total,
            margin_amount,
            margin_percent,
        })
    }
}

/// 報價購物車
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCart {
    items: Vec<CartItem>,
    order_tiers: Vec<OrderDiscountTier>,
}

impl Default for QuoteCart {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteCart {
    /// 空購物車，使用預設訂單金額折扣
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            order_tiers: OrderDiscountTier::default_tiers(),
        }
    }

    /// 建構器模式：設置訂單金額折扣級距
    pub fn with_order_discount_tiers(mut self, tiers: Vec<OrderDiscountTier>) -> Self {
        self.order_tiers = tiers;
        self
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 計價後加入品項，回傳品項 id
    pub fn add(&mut self, quoter: &Quoter, spec: PatchSpec) -> Result<Uuid> {
        let response = quoter.quote(&spec)?;
        let id = Uuid::new_v4();
        self.items.push(CartItem { id, spec, response });

        tracing::debug!("購物車加入品項 {}，共 {} 項", id, self.items.len());
        Ok(id)
    }

    /// 以新規格重新計價並取代品項（id 不變）
    pub fn update(&mut self, id: Uuid, quoter: &Quoter, spec: PatchSpec) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PricingError::UnknownCartItem(id.to_string()))?;

        item.response = quoter.quote(&spec)?;
        item.spec = spec;
        Ok(())
    }

    /// 移除品項
    pub fn remove(&mut self, id: Uuid) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 彙總所有品項並套用訂單金額折扣
    pub fn summary(&self) -> Result<CartSummary> {
        let total_cost: f64 = self.items.iter().map(CartItem::total_cost).sum();
        let total_price: f64 = self.items.iter().map(CartItem::total_price).sum();

        let mut summary = CartSummary::from_totals(total_cost, total_price, &self.order_tiers)?;
        summary.item_count = self.items.len();
        summary.total_quantity = self.items.iter().map(|item| item.spec.quantity).sum();

        tracing::info!(
            "購物車彙總：{} 項，總額 {:.2}，折扣 {}%，折扣後 {:.2}，毛利率 {:.1}%",
            summary.item_count,
            summary.total_price,
            summary.discount_percent,
            summary.discounted_total,
            summary.margin_percent
        );

        Ok(summary)
    }
}
