//! 搜尋工作狀態
//!
//! 優化過程不直接改動 [`Network`]，而是在 [`Assignment`] 上操作：
//! 每間房屋對應至多一台發電機，並維護各發電機的負荷。
//! 重新分配房屋時只更新兩台發電機的負荷，成本以 [`CostCalculator`] 計算，
//! 結果與重放後的電網 `Network::cost()` 完全一致。

use std::collections::HashMap;

use powernet_core::{CostCalculator, GeneratorLoad, Network};

/// 房屋 -> 發電機的分配狀態
#[derive(Debug, Clone)]
pub struct Assignment {
    /// 各房屋需求量（與電網房屋同索引）
    demands: Vec<u32>,

    /// 各發電機負載（與電網發電機同索引）
    loads: Vec<GeneratorLoad>,

    /// 各房屋目前的發電機
    assigned: Vec<Option<usize>>,

    /// 懲罰權重
    lambda: f64,
}

impl Assignment {
    /// 從電網擷取分配狀態
    ///
    /// 每間房屋取其目前的發電機（多重連線只保留第一個）。
    pub fn from_network(network: &Network) -> Self {
        let generator_index: HashMap<&str, usize> = network
            .generators()
            .iter()
            .enumerate()
            .map(|(idx, gen)| (gen.name(), idx))
            .collect();

        let mut assignment = Self {
            demands: network.houses().iter().map(|h| h.demand()).collect(),
            loads: network
                .generators()
                .iter()
                .map(|g| GeneratorLoad::new(0, g.capacity_max))
                .collect(),
            assigned: vec![None; network.house_count()],
            lambda: network.lambda(),
        };

        for (h, house) in network.houses().iter().enumerate() {
            let current = network
                .current_generator(house.name())
                .and_then(|gen| generator_index.get(gen.name()).copied());
            assignment.reassign(h, current);
        }

        assignment
    }

    pub fn house_count(&self) -> usize {
        self.demands.len()
    }

    pub fn generator_count(&self) -> usize {
        self.loads.len()
    }

    /// 房屋目前的發電機
    pub fn generator_of(&self, house: usize) -> Option<usize> {
        self.assigned[house]
    }

    /// 各發電機負載
    pub fn loads(&self) -> &[GeneratorLoad] {
        &self.loads
    }

    /// 重新分配房屋（`None` 表示中斷連線），回傳原本的發電機
    pub fn reassign(&mut self, house: usize, generator: Option<usize>) -> Option<usize> {
        let previous = self.assigned[house];
        if previous == generator {
            return previous;
        }

        let demand = self.demands[house];
        if let Some(g) = previous {
            self.loads[g].charge -= demand;
        }
        if let Some(g) = generator {
            self.loads[g].charge += demand;
        }
        self.assigned[house] = generator;

        previous
    }

    /// 目前分配的成本
    pub fn cost(&self) -> f64 {
        CostCalculator::cost(&self.loads, self.lambda)
    }

    /// 是否所有房屋都已分配
    pub fn is_complete(&self) -> bool {
        self.assigned.iter().all(Option::is_some)
    }

    /// 以此分配重建一個全新的電網
    ///
    /// 實體依 `source` 的順序複製，懲罰權重沿用 `source`。
    pub fn to_network(&self, source: &Network) -> powernet_core::Result<Network> {
        let mut network = Network::new().with_lambda(source.lambda())?;

        for gen in source.generators() {
            network.add_generator(gen.clone());
        }
        for house in source.houses() {
            network.add_house(house.clone());
        }

        for (h, generator) in self.assigned.iter().enumerate() {
            if let Some(g) = generator {
                network.connect(
                    source.houses()[h].name(),
                    source.generators()[*g].name(),
                )?;
            }
        }

        Ok(network)
    }
}
