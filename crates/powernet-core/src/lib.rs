//! # PowerNet Core
//!
//! 電網核心資料模型：房屋、發電機、連線與成本/驗證公式

pub mod consumption;
pub mod cost;
pub mod generator;
pub mod house;
pub mod network;
pub mod validation;

// Re-export 主要類型
pub use consumption::ConsumptionLevel;
pub use cost::{CostBreakdown, CostCalculator, GeneratorLoad};
pub use generator::Generator;
pub use house::House;
pub use network::{Network, DEFAULT_LAMBDA};
pub use validation::StructuralIssue;

/// 電網錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PowerNetError {
    #[error("房屋未登錄於電網: {0}")]
    UnknownHouse(String),

    #[error("發電機未登錄於電網: {0}")]
    UnknownGenerator(String),

    #[error("房屋 {house} 未連接到預期的發電機 {expected}")]
    NotConnectedToExpected { house: String, expected: String },

    #[error("房屋 {0} 沒有連接任何發電機")]
    NotConnected(String),

    #[error("房屋 {house} 連接的是 {actual}，不是 {requested}")]
    WrongGenerator {
        house: String,
        requested: String,
        actual: String,
    },

    #[error("懲罰權重 lambda 必須 >= 0: {0}")]
    InvalidLambda(f64),

    #[error("無效的消耗等級: {0}")]
    InvalidConsumption(String),
}

impl PowerNetError {
    /// 是否為「未知實體」錯誤（房屋或發電機未登錄）
    pub fn is_unknown_entity(&self) -> bool {
        matches!(
            self,
            PowerNetError::UnknownHouse(_) | PowerNetError::UnknownGenerator(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PowerNetError>;
