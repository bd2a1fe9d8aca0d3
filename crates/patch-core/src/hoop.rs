//! 繡框模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PricingError, Result};

pub type HoopId = Uuid;

/// 預設內緣（公分）
pub const DEFAULT_INTERNAL_MARGIN_CM: f64 = 0.25;

/// 預設安全耳邊（公分）
pub const DEFAULT_SAFETY_EAR_CM: f64 = 2.0;

/// 繡框（所有尺寸單位：公分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hoop {
    /// 繡框ID（不參與計算）
    pub id: HoopId,

    /// 名稱
    pub name: String,

    /// 外框寬
    pub width: f64,

    /// 外框高
    pub height: f64,

    /// 可繡寬度（必須小於外框寬）
    pub usable_width: f64,

    /// 可繡高度（必須小於外框高）
    pub usable_height: f64,

    /// 內緣不可繡區
    pub internal_margin: f64,

    /// 撐布安全耳邊
    pub safety_ear: f64,

    /// 是否啟用
    pub active: bool,
}

impl Hoop {
    /// 創建新的繡框
    pub fn new(
        name: String,
        width: f64,
        height: f64,
        usable_width: f64,
        usable_height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            usable_width,
            usable_height,
            internal_margin: DEFAULT_INTERNAL_MARGIN_CM,
            safety_ear: DEFAULT_SAFETY_EAR_CM,
            active: true,
        }
    }

    /// 以外框尺寸建立，可繡區 = 外框 - 2 × 內緣
    pub fn from_outer(name: String, width: f64, height: f64) -> Self {
        let margin = DEFAULT_INTERNAL_MARGIN_CM;
        Self::new(name, width, height, width - 2.0 * margin, height - 2.0 * margin)
    }

    /// 建構器模式：設置內緣
    pub fn with_internal_margin(mut self, margin: f64) -> Self {
        self.internal_margin = margin;
        self
    }

    /// 建構器模式：設置安全耳邊
    pub fn with_safety_ear(mut self, ear: f64) -> Self {
        self.safety_ear = ear;
        self
    }

    /// 可繡面積（cm²）
    pub fn usable_area(&self) -> f64 {
        self.usable_width * self.usable_height
    }

    /// 目錄編輯時的驗證；最佳化器本身不會呼叫
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PricingError::InvalidHoop("繡框名稱不可為空".to_string()));
        }

        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("usable_width", self.usable_width),
            ("usable_height", self.usable_height),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidHoop(format!(
                    "{}: {} 必須大於 0（目前: {}）",
                    self.name, field, value
                )));
            }
        }

        if self.usable_width >= self.width || self.usable_height >= self.height {
            return Err(PricingError::InvalidHoop(format!(
                "{}: 可繡區 {}x{} 必須小於外框 {}x{}",
                self.name, self.usable_width, self.usable_height, self.width, self.height
            )));
        }

        if self.internal_margin < 0.0 || self.safety_ear < 0.0 {
            return Err(PricingError::InvalidHoop(format!(
                "{}: 內緣與耳邊不可為負",
                self.name
            )));
        }

        Ok(())
    }

    /// 預設繡框目錄（Brother 系列）
    pub fn default_catalog() -> Vec<Hoop> {
        [
            ("Brother Small 20x60", 6.0, 2.0),
            ("Brother Small 30x50", 5.0, 3.0),
            ("Brother Small 40x30", 4.0, 3.0),
            ("Brother Regular 10x10", 10.0, 10.0),
            ("Brother Medium 13x18", 18.0, 13.0),
            ("Brother Extra Large 16x26", 26.0, 16.0),
            ("Brother Large 18x30", 30.0, 18.0),
        ]
        .into_iter()
        .map(|(name, width, height)| Hoop::from_outer(name.to_string(), width, height))
        .collect()
    }
}
