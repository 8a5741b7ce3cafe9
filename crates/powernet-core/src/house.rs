//! 房屋模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ConsumptionLevel;

/// 房屋（需求點）
///
/// 與 [`crate::Generator`] 相同，只以名稱判斷相等。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// 名稱（識別鍵）
    pub name: String,

    /// 消耗等級
    pub consumption: ConsumptionLevel,
}

impl House {
    /// 創建新的房屋
    pub fn new(name: impl Into<String>, consumption: ConsumptionLevel) -> Self {
        Self {
            name: name.into(),
            consumption,
        }
    }

    /// 名稱
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 需求量
    pub fn demand(&self) -> u32 {
        self.consumption.demand()
    }
}

impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for House {}

impl Hash for House {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.consumption)
    }
}
