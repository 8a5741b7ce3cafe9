//! 消耗等級模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PowerNetError;

/// 房屋消耗等級（封閉集合，每級對應固定需求量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionLevel {
    /// 低消耗：10
    Low,
    /// 一般消耗：20
    Normal,
    /// 高消耗：40
    High,
}

impl ConsumptionLevel {
    /// 所有等級（由低到高）
    pub const ALL: [ConsumptionLevel; 3] = [
        ConsumptionLevel::Low,
        ConsumptionLevel::Normal,
        ConsumptionLevel::High,
    ];

    /// 需求量
    pub fn demand(self) -> u32 {
        match self {
            ConsumptionLevel::Low => 10,
            ConsumptionLevel::Normal => 20,
            ConsumptionLevel::High => 40,
        }
    }

    /// 檔案格式中的字面值
    pub fn literal(self) -> &'static str {
        match self {
            ConsumptionLevel::Low => "BASSE",
            ConsumptionLevel::Normal => "NORMAL",
            ConsumptionLevel::High => "FORTE",
        }
    }
}

impl fmt::Display for ConsumptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for ConsumptionLevel {
    type Err = PowerNetError;

    /// 解析字面值（不分大小寫）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASSE" => Ok(ConsumptionLevel::Low),
            "NORMAL" => Ok(ConsumptionLevel::Normal),
            "FORTE" => Ok(ConsumptionLevel::High),
            _ => Err(PowerNetError::InvalidConsumption(s.to_string())),
        }
    }
}
