//! 布章規格模型

use serde::{Deserialize, Serialize};

use crate::catalog::{MachineProfile, MaterialProfile};
use crate::config::{MachineRates, MaterialRates, PricingConfig};

/// 布章外形（公分）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// 矩形：長邊與短邊
    Rectangular { long_side: f64, short_side: f64 },
    /// 圓形：直徑
    Circular { diameter: f64 },
}

impl Shape {
    /// 排版用外框（寬, 高）；圓形以外接正方形計
    pub fn footprint(&self) -> (f64, f64) {
        match *self {
            Shape::Rectangular {
                long_side,
                short_side,
            } => (long_side, short_side),
            Shape::Circular { diameter } => (diameter, diameter),
        }
    }

    /// 主要尺寸（矩形長邊 / 圓形直徑）
    pub fn primary_size(&self) -> f64 {
        match *self {
            Shape::Rectangular { long_side, .. } => long_side,
            Shape::Circular { diameter } => diameter,
        }
    }

    /// 次要尺寸（僅矩形有）
    pub fn secondary_size(&self) -> Option<f64> {
        match *self {
            Shape::Rectangular { short_side, .. } => Some(short_side),
            Shape::Circular { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Shape::Rectangular { .. } => "rectangular",
            Shape::Circular { .. } => "circular",
        }
    }
}

/// 固定方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fixation {
    /// 無固定
    None,
    /// 熱熔膠（以面積計入材料成本）
    ThermoAdhesive,
    /// 魔鬼氈
    Velcro,
    /// 磁鐵片
    Magnetic,
    /// 胸針底座
    Brooch,
}

impl Fixation {
    /// 每件固定附加費；熱熔膠已計入材料，這裡為 0
    pub fn surcharge(&self, config: &PricingConfig) -> f64 {
        match self {
            Fixation::None | Fixation::ThermoAdhesive => 0.0,
            Fixation::Velcro => config.velcro_cost,
            Fixation::Magnetic => config.magnetic_cost,
            Fixation::Brooch => config.brooch_cost,
        }
    }

    /// 是否需要熱熔膠布料
    pub fn uses_thermo_adhesive(&self) -> bool {
        *self == Fixation::ThermoAdhesive
    }

    pub fn code(&self) -> &'static str {
        match self {
            Fixation::None => "none",
            Fixation::ThermoAdhesive => "thermo-adhesive",
            Fixation::Velcro => "velcro",
            Fixation::Magnetic => "magnetic",
            Fixation::Brooch => "brooch",
        }
    }
}

/// 刺繡機台
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Machine {
    Bp1430,
    Bp2100,
    /// 動態目錄中的機台（已在目錄編輯時驗證）
    Custom(MachineProfile),
}

impl Machine {
    /// 取得機台速度與功率
    pub fn rates(&self, config: &PricingConfig) -> MachineRates {
        match self {
            Machine::Bp1430 => MachineRates {
                speed_stitches_per_min: config.bp1430_speed,
                power_kw: config.bp1430_power_kw,
            },
            Machine::Bp2100 => MachineRates {
                speed_stitches_per_min: config.bp2100_speed,
                power_kw: config.bp2100_power_kw,
            },
            Machine::Custom(profile) => profile.rates,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Machine::Bp1430 => "BP1430",
            Machine::Bp2100 => "BP2100",
            Machine::Custom(profile) => &profile.name,
        }
    }
}

/// 底布材質
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BaseMaterial {
    Nylon600,
    Sarja,
    /// 動態目錄中的材質
    Custom(MaterialProfile),
}

impl BaseMaterial {
    /// 取得布料單價與幅寬
    pub fn rates(&self, config: &PricingConfig) -> MaterialRates {
        match self {
            BaseMaterial::Nylon600 => MaterialRates {
                price_per_meter: config.nylon_price_per_meter,
                width_m: config.nylon_width_m,
            },
            BaseMaterial::Sarja => MaterialRates {
                price_per_meter: config.sarja_price_per_meter,
                width_m: config.sarja_width_m,
            },
            BaseMaterial::Custom(profile) => profile.rates,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BaseMaterial::Nylon600 => "Nylon 600",
            BaseMaterial::Sarja => "Sarja",
            BaseMaterial::Custom(profile) => &profile.name,
        }
    }
}

/// 作業模式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WorkMode {
    /// 獨立布章
    Patches,
    /// 客供件：額外布料損耗百分比（整數百分比，例如 5.0）
    CustomerPiece { material_loss_percent: f64 },
}

impl WorkMode {
    /// 材料面積膨脹係數
    pub fn area_factor(&self) -> f64 {
        match *self {
            WorkMode::Patches => 1.0,
            WorkMode::CustomerPiece {
                material_loss_percent,
            } => 1.0 + material_loss_percent / 100.0,
        }
    }
}

/// 單次計價的布章規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchSpec {
    /// 外形與尺寸
    pub shape: Shape,

    /// 針數
    pub stitch_count: u32,

    /// 顏色數
    pub color_count: u32,

    /// 固定方式
    pub fixation: Fixation,

    /// 機台
    pub machine: Machine,

    /// 底布
    pub base_material: BaseMaterial,

    /// 毛利（整數百分比，例如 40.0）
    pub margin_percent: f64,

    /// 數量
    pub quantity: u32,

    /// 是否網路銷售
    pub online_sale: bool,

    /// 作業模式
    pub work_mode: WorkMode,
}

impl PatchSpec {
    /// 創建新的布章規格（BP2100、Nylon 600、無固定、40% 毛利、數量 1）
    pub fn new(shape: Shape, stitch_count: u32, color_count: u32) -> Self {
        Self {
            shape,
            stitch_count,
            color_count,
            fixation: Fixation::None,
            machine: Machine::Bp2100,
            base_material: BaseMaterial::Nylon600,
            margin_percent: 40.0,
            quantity: 1,
            online_sale: false,
            work_mode: WorkMode::Patches,
        }
    }

    /// 以配置的預設毛利建立規格
    pub fn with_config_defaults(
        shape: Shape,
        stitch_count: u32,
        color_count: u32,
        config: &PricingConfig,
    ) -> Self {
        Self::new(shape, stitch_count, color_count)
            .with_margin_percent(config.default_margin_percent())
    }

    /// 矩形布章
    pub fn rectangular(
        long_side: f64,
        short_side: f64,
        stitch_count: u32,
        color_count: u32,
    ) -> Self {
        Self::new(
            Shape::Rectangular {
                long_side,
                short_side,
            },
            stitch_count,
            color_count,
        )
    }

    /// 圓形布章
    pub fn circular(diameter: f64, stitch_count: u32, color_count: u32) -> Self {
        Self::new(Shape::Circular { diameter }, stitch_count, color_count)
    }

    /// 建構器模式：設置固定方式
    pub fn with_fixation(mut self, fixation: Fixation) -> Self {
        self.fixation = fixation;
        self
    }

    /// 建構器模式：設置機台
    pub fn with_machine(mut self, machine: Machine) -> Self {
        self.machine = machine;
        self
    }

    /// 建構器模式：設置底布
    pub fn with_base_material(mut self, material: BaseMaterial) -> Self {
        self.base_material = material;
        self
    }

    /// 建構器模式：設置毛利百分比
    pub fn with_margin_percent(mut self, margin_percent: f64) -> Self {
        self.margin_percent = margin_percent;
        self
    }

    /// 建構器模式：設置數量
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// 建構器模式：設置網路銷售
    pub fn with_online_sale(mut self, online_sale: bool) -> Self {
        self.online_sale = online_sale;
        self
    }

    /// 建構器模式：設置作業模式
    pub fn with_work_mode(mut self, work_mode: WorkMode) -> Self {
        self.work_mode = work_mode;
        self
    }

    /// 列出所有浮點輸入，供計價前做數值檢查
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = match self.shape {
            Shape::Rectangular {
                long_side,
                short_side,
            } => vec![("long_side", long_side), ("short_side", short_side)],
            Shape::Circular { diameter } => vec![("diameter", diameter)],
        };
        fields.push(("margin_percent", self.margin_percent));
        if let WorkMode::CustomerPiece {
            material_loss_percent,
        } = self.work_mode
        {
            fields.push(("material_loss_percent", material_loss_percent));
        }
        fields
    }
}
