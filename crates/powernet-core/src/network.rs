//! 電網聚合
//!
//! 擁有房屋、發電機與「發電機 -> 房屋」連線，並提供成本與結構驗證。
//!
//! # 連線規則
//! - `connect` 不檢查既有連線，直接附加（可能造成同一房屋多重連線）
//! - `modify_connection` / `disconnect` 會先檢查房屋目前的發電機
//! - 多重連線只能透過 [`Network::validate`] 偵測

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::{
    CostBreakdown, CostCalculator, Generator, GeneratorLoad, House, PowerNetError, Result,
};

/// 預設懲罰權重
pub const DEFAULT_LAMBDA: f64 = 10.0;

/// 電網
#[derive(Debug, Clone)]
pub struct Network {
    /// 房屋（依登錄順序）
    houses: Vec<House>,

    /// 發電機（依登錄順序）
    generators: Vec<Generator>,

    /// 房屋名稱 -> 索引
    house_index: HashMap<String, usize>,

    /// 發電機名稱 -> 索引
    generator_index: HashMap<String, usize>,

    /// 連線桶：與 `generators` 同索引，存放房屋索引（保留連線順序）
    buckets: Vec<Vec<usize>>,

    /// 過載懲罰權重
    lambda: f64,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// 創建空電網
    pub fn new() -> Self {
        Self {
            houses: Vec::new(),
            generators: Vec::new(),
            house_index: HashMap::new(),
            generator_index: HashMap::new(),
            buckets: Vec::new(),
            lambda: DEFAULT_LAMBDA,
        }
    }

    /// 建構器模式：設置懲罰權重
    pub fn with_lambda(mut self, lambda: f64) -> Result<Self> {
        self.set_lambda(lambda)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // 實體登錄
    // ------------------------------------------------------------------

    /// 新增房屋
    ///
    /// 名稱已存在時只更新消耗等級並回傳 `false`。
    pub fn add_house(&mut self, house: House) -> bool {
        if let Some(&idx) = self.house_index.get(house.name()) {
            self.houses[idx].consumption = house.consumption;
            return false;
        }

        self.house_index
            .insert(house.name.clone(), self.houses.len());
        self.houses.push(house);
        true
    }

    /// 新增發電機
    ///
    /// 名稱已存在時只更新容量並回傳 `false`；新發電機會得到一個空的連線桶。
    pub fn add_generator(&mut self, generator: Generator) -> bool {
        if let Some(&idx) = self.generator_index.get(generator.name()) {
            self.generators[idx].capacity_max = generator.capacity_max;
            return false;
        }

        self.generator_index
            .insert(generator.name.clone(), self.generators.len());
        self.generators.push(generator);
        self.buckets.push(Vec::new());
        true
    }

    /// 依名稱查找房屋
    pub fn house(&self, name: &str) -> Option<&House> {
        self.house_index.get(name).map(|&idx| &self.houses[idx])
    }

    /// 依名稱查找發電機
    pub fn generator(&self, name: &str) -> Option<&Generator> {
        self.generator_index.get(name).map(|&idx| &self.generators[idx])
    }

    /// 所有房屋（依登錄順序）
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// 所有發電機（依登錄順序）
    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    fn house_idx(&self, name: &str) -> Result<usize> {
        self.house_index
            .get(name)
            .copied()
            .ok_or_else(|| PowerNetError::UnknownHouse(name.to_string()))
    }

    fn generator_idx(&self, name: &str) -> Result<usize> {
        self.generator_index
            .get(name)
            .copied()
            .ok_or_else(|| PowerNetError::UnknownGenerator(name.to_string()))
    }

    // ------------------------------------------------------------------
    // 連線操作
    // ------------------------------------------------------------------

    /// 將房屋連接到發電機
    ///
    /// 不檢查房屋是否已有連線。
    pub fn connect(&mut self, house: &str, generator: &str) -> Result<()> {
        let h = self.house_idx(house)?;
        let g = self.generator_idx(generator)?;

        self.buckets[g].push(h);
        Ok(())
    }

    /// 將房屋從 `old` 移到 `new`
    ///
    /// 房屋目前的發電機必須是 `old`，否則回傳 `NotConnectedToExpected`。
    pub fn modify_connection(&mut self, house: &str, old: &str, new: &str) -> Result<()> {
        let h = self.house_idx(house)?;
        let old_idx = self.generator_idx(old)?;
        let new_idx = self.generator_idx(new)?;

        if self.current_generator_idx(h) != Some(old_idx) {
            return Err(PowerNetError::NotConnectedToExpected {
                house: house.to_string(),
                expected: old.to_string(),
            });
        }

        self.detach(h, old_idx);
        self.buckets[new_idx].push(h);
        Ok(())
    }

    /// 中斷房屋與發電機的連線
    pub fn disconnect(&mut self, house: &str, generator: &str) -> Result<()> {
        let h = self.house_idx(house)?;
        let g = self.generator_idx(generator)?;

        let current = self
            .current_generator_idx(h)
            .ok_or_else(|| PowerNetError::NotConnected(house.to_string()))?;

        if current != g {
            return Err(PowerNetError::WrongGenerator {
                house: house.to_string(),
                requested: generator.to_string(),
                actual: self.generators[current].name.clone(),
            });
        }

        self.detach(h, g);
        Ok(())
    }

    /// 從連線桶移除房屋的第一筆連線
    fn detach(&mut self, house_idx: usize, generator_idx: usize) {
        let bucket = &mut self.buckets[generator_idx];
        if let Some(pos) = bucket.iter().position(|&h| h == house_idx) {
            bucket.remove(pos);
        }
    }

    /// 線性掃描所有連線桶，回傳第一個包含該房屋的發電機索引
    fn current_generator_idx(&self, house_idx: usize) -> Option<usize> {
        self.buckets
            .iter()
            .position(|bucket| bucket.contains(&house_idx))
    }

    /// 房屋目前連接的發電機
    ///
    /// 房屋未連線或未登錄時回傳 `None`。若房屋有多重連線，回傳登錄順序最前面的發電機。
    pub fn current_generator(&self, house: &str) -> Option<&Generator> {
        let h = self.house_index.get(house)?;
        self.current_generator_idx(*h)
            .map(|g| &self.generators[g])
    }

    /// 發電機連線桶中的房屋（依連線順序）
    pub fn houses_of(&self, generator: &str) -> Result<Vec<&House>> {
        let g = self.generator_idx(generator)?;
        Ok(self.buckets[g].iter().map(|&h| &self.houses[h]).collect())
    }

    /// 所有連線（依發電機登錄順序）
    pub fn connections(&self) -> impl Iterator<Item = (&Generator, Vec<&House>)> + '_ {
        self.generators.iter().zip(&self.buckets).map(move |(gen, bucket)| {
            let houses = bucket.iter().map(|&h| &self.houses[h]).collect();
            (gen, houses)
        })
    }

    /// 連線總數（含重複連線）
    pub fn connection_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// 未連接任何發電機的房屋（依登錄順序）
    pub fn unconnected_houses(&self) -> Vec<&House> {
        let mut connected = vec![false; self.houses.len()];
        for &h in self.buckets.iter().flatten() {
            connected[h] = true;
        }

        self.houses
            .iter()
            .zip(connected)
            .filter(|(_, is_connected)| !is_connected)
            .map(|(house, _)| house)
            .collect()
    }

    /// 每間房屋出現在多少個連線桶項目中（與 `houses` 同索引）
    pub(crate) fn connection_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.houses.len()];
        for &h in self.buckets.iter().flatten() {
            counts[h] += 1;
        }
        counts
    }

    // ------------------------------------------------------------------
    // 負荷與成本
    // ------------------------------------------------------------------

    /// 各發電機的負載（依登錄順序）
    pub fn loads(&self) -> Vec<GeneratorLoad> {
        self.generators
            .iter()
            .zip(&self.buckets)
            .map(|(gen, bucket)| {
                let charge = bucket.iter().map(|&h| self.houses[h].demand()).sum();
                GeneratorLoad::new(charge, gen.capacity_max)
            })
            .collect()
    }

    /// 各發電機的負荷（沒有連線的發電機為 0）
    pub fn charge_by_generator(&self) -> HashMap<String, u32> {
        self.generators
            .iter()
            .zip(self.loads())
            .map(|(gen, load)| (gen.name.clone(), load.charge))
            .collect()
    }

    fn load_of(&self, generator: &str) -> Option<GeneratorLoad> {
        let g = *self.generator_index.get(generator)?;
        let charge = self.buckets[g].iter().map(|&h| self.houses[h].demand()).sum();
        Some(GeneratorLoad::new(charge, self.generators[g].capacity_max))
    }

    /// 單台發電機的負荷
    pub fn charge(&self, generator: &str) -> Option<u32> {
        self.load_of(generator).map(|load| load.charge)
    }

    /// 單台發電機的負載率
    pub fn load_ratio(&self, generator: &str) -> Option<f64> {
        self.load_of(generator).map(|load| load.load_ratio())
    }

    /// 單台發電機的過載率
    pub fn overload(&self, generator: &str) -> Option<f64> {
        self.load_of(generator).map(|load| load.overload())
    }

    /// 負載離散度
    pub fn dispersion(&self) -> f64 {
        CostCalculator::dispersion(&self.loads())
    }

    /// 總過載
    pub fn surcharge(&self) -> f64 {
        CostCalculator::surcharge(&self.loads())
    }

    /// 總成本 = 離散度 + lambda * 總過載
    pub fn cost(&self) -> f64 {
        CostCalculator::cost(&self.loads(), self.lambda)
    }

    /// 成本明細
    pub fn cost_breakdown(&self) -> CostBreakdown {
        CostCalculator::breakdown(&self.loads(), self.lambda)
    }

    /// 所有房屋需求總和
    pub fn total_demand(&self) -> u64 {
        self.houses.iter().map(|h| u64::from(h.demand())).sum()
    }

    /// 所有發電機容量總和
    pub fn total_capacity(&self) -> u64 {
        self.generators
            .iter()
            .map(|g| u64::from(g.capacity_max))
            .sum()
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// 設置懲罰權重（必須 >= 0）
    pub fn set_lambda(&mut self, lambda: f64) -> Result<()> {
        if lambda.is_nan() || lambda < 0.0 {
            return Err(PowerNetError::InvalidLambda(lambda));
        }
        self.lambda = lambda;
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "發電機:")?;
        for gen in &self.generators {
            writeln!(f, " - {}", gen)?;
        }

        writeln!(f)?;
        writeln!(f, "房屋:")?;
        for house in &self.houses {
            writeln!(f, " - {}", house)?;
        }

        writeln!(f)?;
        writeln!(f, "連線:")?;
        for (gen, houses) in self.connections() {
            if houses.is_empty() {
                writeln!(f, " - {} -> (無房屋)", gen.name)?;
            } else {
                let names: Vec<&str> = houses.iter().map(|h| h.name()).collect();
                writeln!(f, " - {} -> {}", gen.name, names.join(", "))?;
            }
        }

        Ok(())
    }
}

// ----------------------------------------------------------------------
// 序列化：以快照形式輸出，反序列化時重放登錄與連線以維持索引一致
// ----------------------------------------------------------------------

/// 電網快照
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NetworkSnapshot {
    lambda: f64,
    generators: Vec<Generator>,
    houses: Vec<House>,
    /// (發電機名稱, 房屋名稱列表)
    connections: Vec<(String, Vec<String>)>,
}

impl From<&Network> for NetworkSnapshot {
    fn from(network: &Network) -> Self {
        Self {
            lambda: network.lambda,
            generators: network.generators.clone(),
            houses: network.houses.clone(),
            connections: network
                .connections()
                .map(|(gen, houses)| {
                    (
                        gen.name.clone(),
                        houses.iter().map(|h| h.name.clone()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl TryFrom<NetworkSnapshot> for Network {
    type Error = PowerNetError;

    fn try_from(snapshot: NetworkSnapshot) -> Result<Self> {
        let mut network = Network::new().with_lambda(snapshot.lambda)?;

        for gen in snapshot.generators {
            network.add_generator(gen);
        }
        for house in snapshot.houses {
            network.add_house(house);
        }
        for (gen, houses) in snapshot.connections {
            for house in houses {
                network.connect(&house, &gen)?;
            }
        }

        Ok(network)
    }
}

impl Serialize for Network {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        NetworkSnapshot::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let snapshot = NetworkSnapshot::deserialize(deserializer)?;
        Network::try_from(snapshot).map_err(serde::de::Error::custom)
    }
}
