//! 電網結構驗證

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Network;

/// 結構問題
///
/// 各項檢查互不排斥，[`Network::validate`] 會回報所有符合的問題。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralIssue {
    /// 沒有任何發電機
    NoGenerators,

    /// 沒有任何房屋
    NoHouses,

    /// 房屋未連接任何發電機
    UnconnectedHouse { house: String },

    /// 房屋出現在多筆連線中
    MultiplyConnectedHouse { house: String, connections: usize },

    /// 總需求超過總容量
    DemandExceedsCapacity { demand: u64, capacity: u64 },
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralIssue::NoGenerators => write!(f, "電網沒有任何發電機"),
            StructuralIssue::NoHouses => write!(f, "電網沒有任何房屋"),
            StructuralIssue::UnconnectedHouse { house } => {
                write!(f, "房屋 {} 未連接任何發電機", house)
            }
            StructuralIssue::MultiplyConnectedHouse { house, connections } => {
                write!(f, "房屋 {} 同時連接了 {} 筆發電機連線", house, connections)
            }
            StructuralIssue::DemandExceedsCapacity { demand, capacity } => {
                write!(f, "總需求 ({}) 超過發電機總容量 ({})", demand, capacity)
            }
        }
    }
}

impl Network {
    /// 檢查電網結構
    ///
    /// 依序檢查：無發電機、無房屋、未連線房屋、多重連線房屋、需求超過容量。
    /// 結果為空代表結構有效。
    pub fn validate(&self) -> Vec<StructuralIssue> {
        let mut issues = Vec::new();

        if self.generators().is_empty() {
            issues.push(StructuralIssue::NoGenerators);
        }

        if self.houses().is_empty() {
            issues.push(StructuralIssue::NoHouses);
        }

        for house in self.unconnected_houses() {
            issues.push(StructuralIssue::UnconnectedHouse {
                house: house.name.clone(),
            });
        }

        for (house, count) in self.houses().iter().zip(self.connection_counts()) {
            if count > 1 {
                issues.push(StructuralIssue::MultiplyConnectedHouse {
                    house: house.name.clone(),
                    connections: count,
                });
            }
        }

        let demand = self.total_demand();
        let capacity = self.total_capacity();
        if demand > capacity {
            issues.push(StructuralIssue::DemandExceedsCapacity { demand, capacity });
        }

        issues
    }

    /// 結構是否有效（沒有任何問題）
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
