//! # PowerNet Optimizer
//!
//! 多起點隨機局部搜尋：第一個起點為貪婪單次掃描，其餘為隨機分配，
//! 每個起點再以隨機爬山改善，保留成本最低的結果。

pub mod assignment;
pub mod config;
pub mod local_search;
pub mod multistart;
pub mod seeding;

// Re-export 主要類型
pub use assignment::Assignment;
pub use config::OptimizerConfig;
pub use local_search::{ClimbStats, HillClimber};
pub use multistart::{optimize_multi_start, MultiStartOptimizer};
pub use seeding::{GreedySeeder, RandomSeeder};

use powernet_core::Network;
use serde::{Deserialize, Serialize};

/// 優化器錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    #[error("起點數量必須至少為 1")]
    NoRestarts,

    #[error("無效的優化器配置: {0}")]
    InvalidConfig(String),

    #[error("電網操作錯誤: {0}")]
    Network(#[from] powernet_core::PowerNetError),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;

/// 起點類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedKind {
    /// 貪婪單次掃描
    Greedy,
    /// 隨機分配
    Random,
}

/// 單一起點的結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartOutcome {
    /// 起點序號（從 0 開始）
    pub index: usize,

    pub seed_kind: SeedKind,

    /// 起點建構後的成本
    pub seed_cost: f64,

    /// 爬山後的成本
    pub final_cost: f64,

    /// 爬山統計
    pub climb: ClimbStats,
}

/// 優化結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 優化後的全新電網（與輸入電網無共享）
    pub network: Network,

    /// 輸入電網的成本
    pub initial_cost: f64,

    /// 最佳成本
    pub best_cost: f64,

    /// 最佳結果來自哪個起點（退化輸入時為 None）
    pub best_restart: Option<usize>,

    /// 每個起點的結果
    pub restarts: Vec<RestartOutcome>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: u128,
}

impl OptimizationResult {
    /// 成本改善量（輸入成本 - 最佳成本）
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.best_cost
    }

    /// 是否未經搜尋（沒有房屋或沒有發電機）
    pub fn is_degenerate(&self) -> bool {
        self.restarts.is_empty()
    }
}
