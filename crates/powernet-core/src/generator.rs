//! 發電機模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 發電機
///
/// 以名稱識別：兩台發電機名稱相同即視為相等，與容量無關。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generator {
    /// 名稱（識別鍵）
    pub name: String,

    /// 最大容量
    pub capacity_max: u32,
}

impl Generator {
    /// 創建新的發電機
    pub fn new(name: impl Into<String>, capacity_max: u32) -> Self {
        Self {
            name: name.into(),
            capacity_max,
        }
    }

    /// 名稱
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Generator {}

impl Hash for Generator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (容量: {})", self.name, self.capacity_max)
    }
}
