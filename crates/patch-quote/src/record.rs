//! 報價儲存記錄
//!
//! 金額、百分比與尺寸一律以定點整數（× 100）保存，讀回時再轉為小數。

use chrono::{DateTime, Utc};
use patch_core::{PatchSpec, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fixed_point::{decode_fixed, encode_fixed};
use crate::quoter::QuoteResponse;

/// 報價記錄（定點整數）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,

    // 輸入
    pub shape: String,
    /// 矩形長邊或圓形直徑
    pub primary_size: i64,
    /// 矩形短邊
    pub secondary_size: Option<i64>,
    pub stitch_count: u32,
    pub color_count: u32,
    pub fixation: String,
    pub machine: String,
    pub base_material: String,
    pub margin_percent: i64,
    pub quantity: u32,
    pub online_sale: bool,

    // 結果
    pub materials_cost: i64,
    pub thread_cost: i64,
    pub energy_cost: i64,
    pub technical_fee: i64,
    pub fixation_surcharge: i64,
    pub production_cost: i64,
    pub final_unit_price: i64,
    pub discount_percent: i64,
    pub unit_price_after_discount: i64,
    pub die_fee_charged: i64,
    pub grand_total: i64,

    // 繡框
    pub hoop_name: Option<String>,
    pub pieces_per_hoop: Option<u32>,
}

/// 讀回的報價摘要（小數）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub primary_size: Decimal,
    pub secondary_size: Option<Decimal>,
    pub margin_percent: Decimal,
    pub quantity: u32,
    pub materials_cost: Decimal,
    pub thread_cost: Decimal,
    pub energy_cost: Decimal,
    pub technical_fee: Decimal,
    pub fixation_surcharge: Decimal,
    pub production_cost: Decimal,
    pub final_unit_price: Decimal,
    pub discount_percent: Decimal,
    pub unit_price_after_discount: Decimal,
    pub die_fee_charged: Decimal,
    pub grand_total: Decimal,
    pub hoop_name: Option<String>,
    pub pieces_per_hoop: Option<u32>,
}

impl QuoteRecord {
    /// 由規格與報價回應建立記錄
    pub fn from_response(spec: &PatchSpec, response: &QuoteResponse) -> Result<Self> {
        let pricing = &response.pricing;

        let secondary_size = spec
            .shape
            .secondary_size()
            .map(|size| encode_fixed("secondary_size", size))
            .transpose()?;

        let record = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            shape: spec.shape.code().to_string(),
            primary_size: encode_fixed("primary_size", spec.shape.primary_size())?,
            secondary_size,
            stitch_count: spec.stitch_count,
            color_count: spec.color_count,
            fixation: spec.fixation.code().to_string(),
            machine: spec.machine.label().to_string(),
            base_material: spec.base_material.label().to_string(),
            margin_percent: encode_fixed("margin_percent", spec.margin_percent)?,
            quantity: spec.quantity,
            online_sale: spec.online_sale,
            materials_cost: encode_fixed("materials_cost", pricing.materials_cost)?,
            thread_cost: encode_fixed("thread_cost", pricing.thread_cost)?,
            energy_cost: encode_fixed("energy_cost", pricing.energy_cost)?,
            technical_fee: encode_fixed("technical_fee", pricing.technical_fee)?,
            fixation_surcharge: encode_fixed("fixation_surcharge", pricing.fixation_surcharge)?,
            production_cost: encode_fixed("production_cost", pricing.production_cost)?,
            final_unit_price: encode_fixed("final_unit_price", pricing.final_unit_price)?,
            discount_percent: encode_fixed("discount_percent", pricing.discount_percent)?,
            unit_price_after_discount: encode_fixed(
                "unit_price_after_discount",
                pricing.unit_price_after_discount,
            )?,
            die_fee_charged: encode_fixed("die_fee_charged", pricing.die_fee_charged)?,
            grand_total: encode_fixed("grand_total", pricing.grand_total)?,
            hoop_name: response.hoop.as_ref().map(|fit| fit.hoop.name.clone()),
            pieces_per_hoop: response.hoop.as_ref().map(|fit| fit.total_pieces),
        };

        tracing::debug!("建立報價記錄 {}：總額 {} 分", record.id, record.grand_total);
        Ok(record)
    }

    /// 轉回小數
    pub fn decode(&self) -> QuoteSummary {
        QuoteSummary {
            id: self.id,
            created_at: self.created_at,
            primary_size: decode_fixed(self.primary_size),
            secondary_size: self.secondary_size.map(decode_fixed),
            margin_percent: decode_fixed(self.margin_percent),
            quantity: self.quantity,
            materials_cost: decode_fixed(self.materials_cost),
            thread_cost: decode_fixed(self.thread_cost),
            energy_cost: decode_fixed(self.energy_cost),
            technical_fee: decode_fixed(self.technical_fee),
            fixation_surcharge: decode_fixed(self.fixation_surcharge),
            production_cost: decode_fixed(self.production_cost),
            final_unit_price: decode_fixed(self.final_unit_price),
            discount_percent: decode_fixed(self.discount_percent),
            unit_price_after_discount: decode_fixed(self.unit_price_after_discount),
            die_fee_charged: decode_fixed(self.die_fee_charged),
            grand_total: decode_fixed(self.grand_total),
            hoop_name: self.hoop_name.clone(),
            pieces_per_hoop: self.pieces_per_hoop,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
