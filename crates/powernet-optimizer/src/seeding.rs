//! 起點建構
//!
//! - 貪婪起點：依房屋順序掃描一次，每間房屋套用最佳的嚴格降成本移動
//! - 隨機起點：每間房屋均勻隨機指定一台發電機

use rand::Rng;

use crate::Assignment;

/// 貪婪起點建構器
pub struct GreedySeeder;

impl GreedySeeder {
    /// 單次掃描改善，回傳套用的移動數
    ///
    /// 每間房屋只處理一次，結果與房屋順序有關。
    pub fn improve(assignment: &mut Assignment) -> usize {
        let mut moves = 0;

        for house in 0..assignment.house_count() {
            let current = assignment.generator_of(house);
            let mut best_cost = assignment.cost();
            let mut best_generator = current;

            for generator in 0..assignment.generator_count() {
                if Some(generator) == current {
                    continue;
                }

                assignment.reassign(house, Some(generator));
                let cost = assignment.cost();
                if cost < best_cost {
                    best_cost = cost;
                    best_generator = Some(generator);
                }
            }

            // 套用最佳移動（沒有改善時即還原）
            assignment.reassign(house, best_generator);

            if best_generator != current {
                moves += 1;
                tracing::debug!(
                    "貪婪移動：房屋 #{} {:?} -> {:?}，成本 {:.6}",
                    house,
                    current,
                    best_generator,
                    best_cost
                );
            }
        }

        moves
    }
}

/// 隨機起點建構器
pub struct RandomSeeder;

impl RandomSeeder {
    /// 每間房屋無條件重新分配到一台隨機發電機
    pub fn seed<R: Rng + ?Sized>(assignment: &mut Assignment, rng: &mut R) {
        let generators = assignment.generator_count();
        if generators == 0 {
            return;
        }

        for house in 0..assignment.house_count() {
            let generator = rng.gen_range(0..generators);
            assignment.reassign(house, Some(generator));
        }
    }
}
