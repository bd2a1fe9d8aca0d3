//! 定價配置模型

use serde::{Deserialize, Serialize};

use crate::{PricingError, Result};

/// 全域定價參數
///
/// 比例類欄位（損耗、預設毛利、最低毛利、網路銷售加成）以小數儲存（0.40 = 40%）。
/// 長度單位：布料寬度與線長為公尺，耳邊與間距為公分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    // ---- 布料 ----
    /// Nylon 600 每公尺價格
    pub nylon_price_per_meter: f64,
    /// Nylon 600 幅寬（公尺）
    pub nylon_width_m: f64,
    /// Sarja 每公尺價格
    pub sarja_price_per_meter: f64,
    /// Sarja 幅寬（公尺）
    pub sarja_width_m: f64,
    /// 襯布整卷價格
    pub interlining_total_price: f64,
    /// 襯布整卷長度（公尺）
    pub interlining_length_m: f64,
    /// 襯布幅寬（公尺）
    pub interlining_width_m: f64,
    /// 熱熔膠每公尺價格
    pub thermo_price_per_meter: f64,
    /// 熱熔膠幅寬（公尺）
    pub thermo_width_m: f64,
    /// 布料損耗比例
    pub waste_fraction: f64,
    /// 上框耳邊（公分，每邊加一次）
    pub ear_cm: f64,
    /// 繡片間距（公分）
    pub gutter_cm: f64,

    // ---- 繡線 ----
    /// 每卷繡線價格
    pub thread_roll_price: f64,
    /// 每卷繡線長度（公尺）
    pub thread_roll_length_m: f64,
    /// 每千針耗線（公尺）
    pub thread_per_1000_stitches_m: f64,
    /// 每次換色損耗（公尺）
    pub thread_loss_per_color_m: f64,

    // ---- 能源 ----
    /// 電價（每 kWh）
    pub energy_tariff_per_kwh: f64,
    /// BP1430 速度（針/分）
    pub bp1430_speed: f64,
    /// BP1430 功率（kW）
    pub bp1430_power_kw: f64,
    /// BP2100 速度（針/分）
    pub bp2100_speed: f64,
    /// BP2100 功率（kW）
    pub bp2100_power_kw: f64,

    // ---- 固定方式 ----
    pub velcro_cost: f64,
    pub magnetic_cost: f64,
    pub brooch_cost: f64,

    // ---- 價格 ----
    /// 預設毛利
    pub default_margin: f64,
    /// 最低毛利（低於時發出警告）
    pub minimum_margin: f64,
    /// 進位單位（例如 0.50）
    pub rounding_unit: f64,
    /// 網路銷售額外毛利
    pub online_extra_margin: f64,
    /// 每千針技術費
    pub technical_fee_per_1000: f64,
    /// 技術費上限
    pub technical_fee_ceiling: f64,
    /// 版帶（打版）建立費
    pub die_fee: f64,
    /// 版帶費免收門檻（訂單金額）
    pub die_fee_waiver_threshold: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            nylon_price_per_meter: 9.0,
            nylon_width_m: 1.4,
            sarja_price_per_meter: 29.0,
            sarja_width_m: 1.4,
            interlining_total_price: 80.0,
            interlining_length_m: 50.0,
            interlining_width_m: 0.5,
            thermo_price_per_meter: 9.0,
            thermo_width_m: 0.5,
            waste_fraction: 0.15,
            ear_cm: 2.0,
            gutter_cm: 0.5,
            thread_roll_price: 10.5,
            thread_roll_length_m: 4000.0,
            thread_per_1000_stitches_m: 3.0,
            thread_loss_per_color_m: 0.15,
            energy_tariff_per_kwh: 0.9,
            bp1430_speed: 650.0,
            bp1430_power_kw: 0.09,
            bp2100_speed: 1050.0,
            bp2100_power_kw: 0.12,
            velcro_cost: 2.5,
            magnetic_cost: 3.0,
            brooch_cost: 2.0,
            default_margin: 0.40,
            minimum_margin: 0.25,
            rounding_unit: 0.5,
            online_extra_margin: 0.10,
            technical_fee_per_1000: 0.10,
            technical_fee_ceiling: 5.0,
            die_fee: 50.0,
            die_fee_waiver_threshold: 150.0,
        }
    }
}

impl PricingConfig {
    /// 建構器模式：設置進位單位
    pub fn with_rounding_unit(mut self, unit: f64) -> Self {
        self.rounding_unit = unit;
        self
    }

    /// 建構器模式：設置最低毛利
    pub fn with_minimum_margin(mut self, margin: f64) -> Self {
        self.minimum_margin = margin;
        self
    }

    /// 建構器模式：設置網路銷售額外毛利
    pub fn with_online_extra_margin(mut self, margin: f64) -> Self {
        self.online_extra_margin = margin;
        self
    }

    /// 建構器模式：設置技術費費率與上限
    pub fn with_technical_fee(mut self, per_1000: f64, ceiling: f64) -> Self {
        self.technical_fee_per_1000 = per_1000;
        self.technical_fee_ceiling = ceiling;
        self
    }

    /// 建構器模式：設置版帶費與免收門檻
    pub fn with_die_fee(mut self, fee: f64, waiver_threshold: f64) -> Self {
        self.die_fee = fee;
        self.die_fee_waiver_threshold = waiver_threshold;
        self
    }

    /// 預設毛利（整數百分比，例如 40.0）
    pub fn default_margin_percent(&self) -> f64 {
        self.default_margin * 100.0
    }

    /// 從 JSON 載入配置（載入後立即驗證）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PricingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 輸出為 JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 驗證配置
    ///
    /// 所有金額與長度必須為非負有限值；作為除數的欄位必須大於 0。
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("nylon_price_per_meter", self.nylon_price_per_meter),
            ("sarja_price_per_meter", self.sarja_price_per_meter),
            ("interlining_total_price", self.interlining_total_price),
            ("thermo_price_per_meter", self.thermo_price_per_meter),
            ("waste_fraction", self.waste_fraction),
            ("ear_cm", self.ear_cm),
            ("gutter_cm", self.gutter_cm),
            ("thread_roll_price", self.thread_roll_price),
            ("thread_per_1000_stitches_m", self.thread_per_1000_stitches_m),
            ("thread_loss_per_color_m", self.thread_loss_per_color_m),
            ("energy_tariff_per_kwh", self.energy_tariff_per_kwh),
            ("bp1430_power_kw", self.bp1430_power_kw),
            ("bp2100_power_kw", self.bp2100_power_kw),
            ("velcro_cost", self.velcro_cost),
            ("magnetic_cost", self.magnetic_cost),
            ("brooch_cost", self.brooch_cost),
            ("default_margin", self.default_margin),
            ("minimum_margin", self.minimum_margin),
            ("online_extra_margin", self.online_extra_margin),
            ("technical_fee_per_1000", self.technical_fee_per_1000),
            ("technical_fee_ceiling", self.technical_fee_ceiling),
            ("die_fee", self.die_fee),
            ("die_fee_waiver_threshold", self.die_fee_waiver_threshold),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::InvalidConfig(format!(
                    "{} 必須為非負數（目前: {}）",
                    name, value
                )));
            }
        }

        let strictly_positive = [
            ("nylon_width_m", self.nylon_width_m),
            ("sarja_width_m", self.sarja_width_m),
            ("interlining_length_m", self.interlining_length_m),
            ("interlining_width_m", self.interlining_width_m),
            ("thermo_width_m", self.thermo_width_m),
            ("thread_roll_length_m", self.thread_roll_length_m),
            ("bp1430_speed", self.bp1430_speed),
            ("bp2100_speed", self.bp2100_speed),
            ("rounding_unit", self.rounding_unit),
        ];

        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidConfig(format!(
                    "{} 必須大於 0（目前: {}）",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// 襯布每平方公尺成本
    pub fn interlining_per_m2(&self) -> f64 {
        self.interlining_total_price / (self.interlining_length_m * self.interlining_width_m)
    }

    /// 熱熔膠每平方公尺成本
    pub fn thermo_per_m2(&self) -> f64 {
        self.thermo_price_per_meter / self.thermo_width_m
    }

    /// 繡線每公尺成本
    pub fn thread_cost_per_m(&self) -> f64 {
        self.thread_roll_price / self.thread_roll_length_m
    }
}

/// 機台速度與功率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineRates {
    /// 速度（針/分）
    pub speed_stitches_per_min: f64,
    /// 功率（kW）
    pub power_kw: f64,
}

/// 布料單價與幅寬
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialRates {
    pub price_per_meter: f64,
    pub width_m: f64,
}

impl MaterialRates {
    /// 每平方公尺成本
    pub fn per_m2(&self) -> f64 {
        self.price_per_meter / self.width_m
    }
}
