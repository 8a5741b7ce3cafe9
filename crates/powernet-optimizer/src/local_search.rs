//! 隨機爬山局部搜尋

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Assignment;

/// 單次爬山的統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbStats {
    /// 實際執行的試探次數
    pub iterations: usize,

    /// 被接受的移動次數
    pub improvements: usize,
}

/// 隨機爬山
///
/// 每次試探隨機挑一間房屋與一台發電機，成本嚴格下降才接受，否則還原。
/// 抽到房屋目前的發電機時只消耗迭代次數，不計入連續未改善次數。
pub struct HillClimber {
    /// 試探次數上限
    max_iterations: usize,

    /// 連續未改善上限
    patience: usize,
}

impl HillClimber {
    /// 創建新的爬山器
    pub fn new(max_iterations: usize, patience: usize) -> Self {
        Self {
            max_iterations,
            patience,
        }
    }

    /// 就地改善分配
    pub fn climb<R: Rng + ?Sized>(&self, assignment: &mut Assignment, rng: &mut R) -> ClimbStats {
        let mut stats = ClimbStats::default();

        let houses = assignment.house_count();
        let generators = assignment.generator_count();
        if houses == 0 || generators == 0 {
            return stats;
        }

        let mut current_cost = assignment.cost();
        let mut failures = 0;

        while stats.iterations < self.max_iterations && failures < self.patience {
            stats.iterations += 1;

            let house = rng.gen_range(0..houses);
            let generator = rng.gen_range(0..generators);

            let previous = assignment.reassign(house, Some(generator));
            if previous == Some(generator) {
                continue;
            }

            let cost = assignment.cost();
            if cost < current_cost {
                current_cost = cost;
                stats.improvements += 1;
                failures = 0;
            } else {
                assignment.reassign(house, previous);
                failures += 1;
            }
        }

        stats
    }
}
