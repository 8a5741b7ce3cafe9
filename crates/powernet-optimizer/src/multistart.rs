//! 多起點優化器

use std::time::Instant;

use powernet_core::Network;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    Assignment, GreedySeeder, HillClimber, OptimizationResult, OptimizerConfig, OptimizerError,
    RandomSeeder, RestartOutcome, SeedKind,
};

/// 多起點局部搜尋優化器
///
/// 隨機來源由優化器持有；配置了種子時每次執行結果可重現。
pub struct MultiStartOptimizer<R = StdRng> {
    config: OptimizerConfig,
    rng: R,
}

impl MultiStartOptimizer<StdRng> {
    /// 依配置創建優化器（有種子時使用固定種子，否則取系統熵）
    pub fn new(config: OptimizerConfig) -> crate::Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MultiStartOptimizer<R> {
    /// 使用呼叫端提供的隨機來源（忽略 `config.seed`）
    pub fn with_rng(config: OptimizerConfig, rng: R) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// 執行多起點優化
    ///
    /// 輸入電網不會被修改；回傳的電網是依最佳分配重放建立的全新實例。
    pub fn optimize(&mut self, network: &Network) -> crate::Result<OptimizationResult> {
        let start_time = Instant::now();
        let initial_cost = network.cost();

        tracing::info!(
            "開始多起點優化：房屋 {} 間，發電機 {} 台，起點 {} 個，初始成本 {:.6}",
            network.house_count(),
            network.generator_count(),
            self.config.restarts,
            initial_cost
        );

        let issues = network.validate();
        if !issues.is_empty() {
            tracing::warn!("輸入電網有 {} 個結構問題，結果不保證優於輸入", issues.len());
        }

        let base = Assignment::from_network(network);

        if base.house_count() == 0 || base.generator_count() == 0 {
            tracing::info!("電網沒有房屋或沒有發電機，略過搜尋");
            let copy = base.to_network(network)?;
            let best_cost = copy.cost();
            return Ok(OptimizationResult {
                network: copy,
                initial_cost,
                best_cost,
                best_restart: None,
                restarts: Vec::new(),
                calculation_time_ms: start_time.elapsed().as_millis(),
            });
        }

        let budget = self
            .config
            .iteration_budget(base.house_count(), base.generator_count());
        let climber = HillClimber::new(budget, self.config.patience);
        tracing::debug!("每個起點的迭代上限: {}", budget);

        let mut best: Option<(usize, Assignment, f64)> = None;
        let mut outcomes = Vec::with_capacity(self.config.restarts);

        for index in 0..self.config.restarts {
            let mut candidate = base.clone();

            let seed_kind = if index == 0 {
                GreedySeeder::improve(&mut candidate);
                SeedKind::Greedy
            } else {
                RandomSeeder::seed(&mut candidate, &mut self.rng);
                SeedKind::Random
            };
            let seed_cost = candidate.cost();

            let climb = climber.climb(&mut candidate, &mut self.rng);
            let final_cost = candidate.cost();

            tracing::debug!(
                "起點 #{} ({:?})：起點成本 {:.6} -> {:.6}，試探 {} 次，接受 {} 次",
                index,
                seed_kind,
                seed_cost,
                final_cost,
                climb.iterations,
                climb.improvements
            );

            outcomes.push(RestartOutcome {
                index,
                seed_kind,
                seed_cost,
                final_cost,
                climb,
            });

            // 嚴格小於：成本相同時保留較早的起點
            let is_better = best
                .as_ref()
                .map_or(true, |(_, _, best_cost)| final_cost < *best_cost);
            if is_better {
                best = Some((index, candidate, final_cost));
            }
        }

        let (best_restart, best_assignment, best_cost) =
            best.ok_or(OptimizerError::NoRestarts)?;
        let optimized = best_assignment.to_network(network)?;

        tracing::info!(
            "多起點優化完成，耗時 {:?}，最佳成本 {:.6}（起點 #{}）",
            start_time.elapsed(),
            best_cost,
            best_restart
        );

        Ok(OptimizationResult {
            network: optimized,
            initial_cost,
            best_cost,
            best_restart: Some(best_restart),
            restarts: outcomes,
            calculation_time_ms: start_time.elapsed().as_millis(),
        })
    }
}

/// 以 `restarts` 個起點優化電網，回傳全新的電網
///
/// 每次呼叫使用不同的隨機序列；需要可重現結果時請改用
/// [`MultiStartOptimizer`] 並設置種子。
pub fn optimize_multi_start(network: &Network, restarts: usize) -> crate::Result<Network> {
    let mut optimizer = MultiStartOptimizer::new(OptimizerConfig::new(restarts))?;
    Ok(optimizer.optimize(network)?.network)
}
