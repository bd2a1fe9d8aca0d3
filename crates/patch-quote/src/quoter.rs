//! 報價組裝：計價 + 繡框建議

use patch_calc::calculator::compute_price;
use patch_calc::PricingResult;
use patch_core::{DiscountTier, Hoop, PatchSpec, PricingConfig, Result, Shape};
use patch_optimizer::{FitResult, HoopSelector};
use serde::{Deserialize, Serialize};

use crate::record::QuoteRecord;

/// 報價回應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// 計價結果
    pub pricing: PricingResult,

    /// 建議繡框（依數量最少框次選取）
    pub hoop: Option<FitResult>,

    /// 所需繡框次數
    pub hoops_needed: Option<u32>,
}

/// 報價器
///
/// 持有配置、折扣級距與繡框目錄的快照。
#[derive(Debug, Clone)]
pub struct Quoter {
    config: PricingConfig,
    discount_tiers: Vec<DiscountTier>,
    hoops: Vec<Hoop>,
}

impl Quoter {
    pub fn new(config: PricingConfig, discount_tiers: Vec<DiscountTier>, hoops: Vec<Hoop>) -> Self {
        Self {
            config,
            discount_tiers,
            hoops,
        }
    }

    /// 以預設配置、預設折扣與預設繡框目錄建立
    pub fn with_defaults() -> Self {
        Self::new(
            PricingConfig::default(),
            DiscountTier::default_tiers(),
            Hoop::default_catalog(),
        )
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn hoops(&self) -> &[Hoop] {
        &self.hoops
    }

    /// 以目前配置的預設毛利建立規格
    pub fn new_spec(&self, shape: Shape, stitch_count: u32, color_count: u32) -> PatchSpec {
        PatchSpec::with_config_defaults(shape, stitch_count, color_count, &self.config)
    }

    /// 產生報價
    ///
    /// 圓形布章以直徑 × 直徑排版；只使用啟用中的繡框，件間距取 `gutter_cm`。
    pub fn quote(&self, spec: &PatchSpec) -> Result<QuoteResponse> {
        let pricing = compute_price(spec, &self.config, &self.discount_tiers)?;

        let active: Vec<Hoop> = self.hoops.iter().filter(|h| h.active).cloned().collect();
        let (width, height) = spec.shape.footprint();
        let hoop = HoopSelector::best_for_quantity(
            width,
            height,
            spec.quantity,
            &active,
            self.config.gutter_cm,
        );
        let hoops_needed = hoop.as_ref().and_then(|fit| fit.hoops_needed(spec.quantity));

        match &hoop {
            Some(fit) => tracing::info!(
                "報價完成：總額 {:.2}，繡框 {}，需 {} 框",
                pricing.grand_total,
                fit.hoop.name,
                hoops_needed.unwrap_or_default()
            ),
            None => tracing::info!("報價完成：總額 {:.2}，無適用繡框", pricing.grand_total),
        }

        Ok(QuoteResponse {
            pricing,
            hoop,
            hoops_needed,
        })
    }

    /// 產生報價並轉為儲存記錄
    pub fn quote_record(&self, spec: &PatchSpec) -> Result<(QuoteResponse, QuoteRecord)> {
        let response = self.quote(spec)?;
        let record = QuoteRecord::from_response(spec, &response)?;
        Ok((response, record))
    }
}
