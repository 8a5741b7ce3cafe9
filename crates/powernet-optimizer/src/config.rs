//! 優化器配置

use serde::{Deserialize, Serialize};

use crate::OptimizerError;

/// 多起點局部搜尋的參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// 起點數量（第一個為貪婪起點，其餘為隨機起點）
    pub restarts: usize,

    /// 每組（房屋, 發電機）分配的爬山迭代次數
    ///
    /// 每個起點的迭代上限 = 房屋數 * 發電機數 * 此值
    pub iterations_per_pair: usize,

    /// 連續未改善次數上限，達到後提前結束爬山
    pub patience: usize,

    /// 隨機種子（None 表示每次執行都不同）
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

impl OptimizerConfig {
    /// 創建新的優化器配置
    pub fn new(restarts: usize) -> Self {
        Self {
            restarts,
            iterations_per_pair: 1000,
            patience: 1000,
            seed: None,
        }
    }

    /// 建構器模式：設置迭代倍數
    pub fn with_iterations_per_pair(mut self, iterations: usize) -> Self {
        self.iterations_per_pair = iterations;
        self
    }

    /// 建構器模式：設置連續未改善上限
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// 建構器模式：設置隨機種子
    ///
    /// # 範例
    /// ```
    /// # use powernet_optimizer::OptimizerConfig;
    /// let config = OptimizerConfig::new(5).with_seed(42); // 可重現的執行
    /// assert_eq!(config.seed, Some(42));
    /// ```
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 從 JSON 讀取配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OptimizerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否合法
    pub fn validate(&self) -> crate::Result<()> {
        if self.restarts == 0 {
            return Err(OptimizerError::NoRestarts);
        }
        Ok(())
    }

    /// 單一起點的爬山迭代上限（房屋或發電機為 0 時為 0）
    pub fn iteration_budget(&self, houses: usize, generators: usize) -> usize {
        houses
            .saturating_mul(generators)
            .saturating_mul(self.iterations_per_pair)
    }
}
