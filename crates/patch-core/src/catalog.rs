//! 動態目錄（使用者自訂機台與底布）
//!
//! 目錄項目在新增/修改時驗證；刪除為停用（soft-disable）。
//! 計價時只會拿到已解析好的 `Machine::Custom` / `BaseMaterial::Custom`。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::{MachineRates, MaterialRates};
use crate::patch::{BaseMaterial, Machine};
use crate::{PricingError, Result};

/// 自訂機台
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineProfile {
    pub id: Uuid,
    pub name: String,
    pub rates: MachineRates,
    pub active: bool,
}

impl MachineProfile {
    /// 創建新的機台（尚未驗證）
    pub fn new(name: String, speed_stitches_per_min: f64, power_kw: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rates: MachineRates {
                speed_stitches_per_min,
                power_kw,
            },
            active: true,
        }
    }

    /// 驗證：名稱非空、速度與功率為正
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PricingError::InvalidConfig("機台名稱不可為空".to_string()));
        }
        check_positive(&self.name, "speed", self.rates.speed_stitches_per_min)?;
        check_positive(&self.name, "power_kw", self.rates.power_kw)
    }
}

/// 自訂底布
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    pub id: Uuid,
    pub name: String,
    pub rates: MaterialRates,
    pub active: bool,
}

impl MaterialProfile {
    /// 創建新的底布（尚未驗證）
    pub fn new(name: String, price_per_meter: f64, width_m: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rates: MaterialRates {
                price_per_meter,
                width_m,
            },
            active: true,
        }
    }

    /// 驗證：名稱非空、單價與幅寬為正
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PricingError::InvalidConfig("材質名稱不可為空".to_string()));
        }
        check_positive(&self.name, "price_per_meter", self.rates.price_per_meter)?;
        check_positive(&self.name, "width_m", self.rates.width_m)
    }
}

fn check_positive(owner: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidConfig(format!(
            "{} 的 {} 必須大於 0（目前: {}）",
            owner, field, value
        )))
    }
}

/// 動態目錄
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    machines: HashMap<Uuid, MachineProfile>,
    materials: HashMap<Uuid, MaterialProfile>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增機台（驗證後寫入）
    pub fn add_machine(&mut self, profile: MachineProfile) -> Result<Uuid> {
        profile.validate()?;
        let id = profile.id;
        self.machines.insert(id, profile);
        Ok(id)
    }

    /// 更新機台速度與功率
    pub fn update_machine(&mut self, id: Uuid, rates: MachineRates) -> Result<()> {
        let existing = self
            .machines
            .get(&id)
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))?;

        let mut updated = existing.clone();
        updated.rates = rates;
        updated.validate()?;
        self.machines.insert(id, updated);
        Ok(())
    }

    /// 停用機台
    pub fn disable_machine(&mut self, id: Uuid) -> Result<()> {
        let profile = self
            .machines
            .get_mut(&id)
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))?;
        profile.active = false;
        Ok(())
    }

    /// 解析機台 ID（停用項目視同不存在）
    pub fn machine(&self, id: Uuid) -> Result<Machine> {
        self.machines
            .get(&id)
            .filter(|p| p.active)
            .map(|p| Machine::Custom(p.clone()))
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))
    }

    /// 啟用中的機台（依名稱排序）
    pub fn active_machines(&self) -> Vec<&MachineProfile> {
        let mut list: Vec<_> = self.machines.values().filter(|p| p.active).collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// 新增底布（驗證後寫入）
    pub fn add_material(&mut self, profile: MaterialProfile) -> Result<Uuid> {
        profile.validate()?;
        let id = profile.id;
        self.materials.insert(id, profile);
        Ok(id)
    }

    /// 更新底布單價與幅寬
    pub fn update_material(&mut self, id: Uuid, rates: MaterialRates) -> Result<()> {
        let existing = self
            .materials
            .get(&id)
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))?;

        let mut updated = existing.clone();
        updated.rates = rates;
        updated.validate()?;
        self.materials.insert(id, updated);
        Ok(())
    }

    /// 停用底布
    pub fn disable_material(&mut self, id: Uuid) -> Result<()> {
        let profile = self
            .materials
            .get_mut(&id)
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))?;
        profile.active = false;
        Ok(())
    }

    /// 解析底布 ID
    pub fn material(&self, id: Uuid) -> Result<BaseMaterial> {
        self.materials
            .get(&id)
            .filter(|p| p.active)
            .map(|p| BaseMaterial::Custom(p.clone()))
            .ok_or_else(|| PricingError::UnknownCatalogEntry(id.to_string()))
    }

    /// 啟用中的底布（依名稱排序）
    pub fn active_materials(&self) -> Vec<&MaterialProfile> {
        let mut list: Vec<_> = self.materials.values().filter(|p| p.active).collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }
}
