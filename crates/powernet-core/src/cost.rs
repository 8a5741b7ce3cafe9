//! 成本計算
//!
//! 所有公式都作用在 [`GeneratorLoad`] 切片上（依發電機登錄順序）。
//! [`crate::Network`] 與優化器共用這些公式，相同的連線配置會得到位元相同的結果。

use serde::{Deserialize, Serialize};

/// 單台發電機的負載（負荷 + 容量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorLoad {
    /// 負荷：已連接房屋的需求總和
    pub charge: u32,

    /// 最大容量
    pub capacity: u32,
}

impl GeneratorLoad {
    /// 創建新的負載記錄
    pub fn new(charge: u32, capacity: u32) -> Self {
        Self { charge, capacity }
    }

    /// 負載率 = 負荷 / 容量（容量為 0 時為 0）
    pub fn load_ratio(&self) -> f64 {
        if self.capacity > 0 {
            f64::from(self.charge) / f64::from(self.capacity)
        } else {
            0.0
        }
    }

    /// 過載率 = max(0, (負荷 - 容量) / 容量)
    ///
    /// 容量為 0 的發電機永遠不計過載。
    pub fn overload(&self) -> f64 {
        if self.capacity > 0 && self.charge > self.capacity {
            f64::from(self.charge - self.capacity) / f64::from(self.capacity)
        } else {
            0.0
        }
    }

    /// 是否過載
    pub fn is_overloaded(&self) -> bool {
        self.capacity > 0 && self.charge > self.capacity
    }
}

/// 成本明細
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 負載離散度
    pub dispersion: f64,

    /// 總過載
    pub surcharge: f64,

    /// 懲罰權重
    pub lambda: f64,

    /// 懲罰項 = lambda * surcharge
    pub penalty: f64,

    /// 總成本 = dispersion + penalty
    pub cost: f64,
}

/// 成本計算器
pub struct CostCalculator;

impl CostCalculator {
    /// 平均負載率（沒有發電機時為 0）
    pub fn mean_load_ratio(loads: &[GeneratorLoad]) -> f64 {
        if loads.is_empty() {
            return 0.0;
        }

        let sum: f64 = loads.iter().map(GeneratorLoad::load_ratio).sum();
        sum / loads.len() as f64
    }

    /// 離散度 = Σ |負載率 - 平均負載率|
    pub fn dispersion(loads: &[GeneratorLoad]) -> f64 {
        let mean = Self::mean_load_ratio(loads);

        loads
            .iter()
            .map(|load| (load.load_ratio() - mean).abs())
            .sum()
    }

    /// 總過載 = Σ 過載率
    pub fn surcharge(loads: &[GeneratorLoad]) -> f64 {
        loads.iter().map(GeneratorLoad::overload).sum()
    }

    /// 成本 = 離散度 + lambda * 總過載
    pub fn cost(loads: &[GeneratorLoad], lambda: f64) -> f64 {
        Self::dispersion(loads) + lambda * Self::surcharge(loads)
    }

    /// 成本明細
    pub fn breakdown(loads: &[GeneratorLoad], lambda: f64) -> CostBreakdown {
        let dispersion = Self::dispersion(loads);
        let surcharge = Self::surcharge(loads);
        let penalty = lambda * surcharge;

        CostBreakdown {
            dispersion,
            surcharge,
            lambda,
            penalty,
            cost: dispersion + penalty,
        }
    }
}
