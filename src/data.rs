//! 背包问题的基本数据格式。
//!
//! 问题在启动时构建一次，此后只读。
//!

use crate::objectives::default::PENALTY_FACTOR;
use crate::Error;
use serde::{Deserialize, Serialize};

/// 一件物品，有价值、重量和体积三个属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub value: i64,
    pub weight: i64,
    pub volume: i64,
}

impl Item {
    pub const fn new(value: i64, weight: i64, volume: i64) -> Self {
        Self {
            value,
            weight,
            volume,
        }
    }

    fn checked_add(&self, other: &Item) -> Option<Item> {
        Some(Item::new(
            self.value.checked_add(other.value)?,
            self.weight.checked_add(other.weight)?,
            self.volume.checked_add(other.volume)?,
        ))
    }
}

/// 一个优化实例：物品列表以及重量、体积上限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub items: Vec<Item>,
    pub max_weight: i64,
    pub max_volume: i64,
}

/// 候选解，第 i 位为真表示选中第 i 件物品
pub type Candidate = Vec<bool>;

impl Problem {
    pub fn new(items: Vec<Item>, max_weight: i64, max_volume: i64) -> Self {
        Self {
            items,
            max_weight,
            max_volume,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 物品和上限都不能为负，全选时的总量和惩罚也必须在 `i64` 范围内
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_empty() {
            return Err("problem.items 不能为空".into());
        }
        if self.max_weight < 0 || self.max_volume < 0 {
            return Err(format!(
                "重量和体积上限不能为负，实际为 {} 和 {}",
                self.max_weight, self.max_volume
            )
            .into());
        }
        let mut total = Item::new(0, 0, 0);
        for (index, item) in self.items.iter().enumerate() {
            if item.value < 0 || item.weight < 0 || item.volume < 0 {
                return Err(format!("物品 {index} 的属性不能为负：{item:?}").into());
            }
            total = total
                .checked_add(item)
                .ok_or_else(|| Error::Config(format!("加上物品 {index} 后总量溢出")))?;
        }
        total
            .weight
            .checked_add(total.volume)
            .and_then(|sum| sum.checked_mul(PENALTY_FACTOR))
            .ok_or_else(|| Error::Config("全选时的超限惩罚溢出".to_string()))?;
        Ok(())
    }

    /// 按下标升序列出候选解选中的物品
    pub fn selected<'a>(
        &'a self,
        candidate: &'a [bool],
    ) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
        self.items
            .iter()
            .zip(candidate)
            .enumerate()
            .filter_map(|(index, (item, &chosen))| chosen.then_some((index, item)))
    }
}

impl Default for Problem {
    /// 内置的八件物品实例
    fn default() -> Self {
        Self::new(
            vec![
                Item::new(10, 5, 3),
                Item::new(8, 4, 2),
                Item::new(15, 8, 6),
                Item::new(4, 2, 1),
                Item::new(12, 6, 4),
                Item::new(6, 3, 2),
                Item::new(11, 7, 5),
                Item::new(7, 4, 3),
            ],
            20,
            15,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_instance() {
        let problem = Problem::default();
        assert_eq!(problem.len(), 8);
        assert_eq!(problem.max_weight, 20);
        assert_eq!(problem.max_volume, 15);
        assert_eq!(problem.items[2], Item::new(15, 8, 6));
    }

    #[test]
    fn selected_in_index_order() {
        let problem = Problem::default();
        let candidate = vec![false, true, false, false, true, false, false, true];
        let indices: Vec<_> = problem.selected(&candidate).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 4, 7]);
    }

    #[test]
    fn validate_rejects_negative_and_overflowing_data() {
        assert!(Problem::default().validate().is_ok());
        assert!(Problem::new(vec![], 1, 1).validate().is_err());
        assert!(Problem::new(vec![Item::new(1, 1, 1)], -1, 1).validate().is_err());
        assert!(Problem::new(vec![Item::new(1, -2, 1)], 1, 1).validate().is_err());
        let half = i64::MAX / 2;
        let overflowing = Problem::new(
            vec![Item::new(1, half, 1), Item::new(1, half, 1), Item::new(1, 10, 1)],
            0,
            0,
        );
        assert!(matches!(overflowing.validate(), Err(Error::Config(_))));
        // 总量不溢出，但乘以惩罚系数后溢出
        let penalty_overflow = Problem::new(vec![Item::new(1, i64::MAX / 5, 0)], 0, 0);
        assert!(penalty_overflow.validate().is_err());
    }

    #[test]
    fn deserialize_from_yaml() {
        let text = "items:\n  - {value: 3, weight: 2, volume: 1}\nmax_weight: 5\nmax_volume: 4\n";
        let problem: Problem = serde_yaml::from_str(text).unwrap();
        assert_eq!(problem, Problem::new(vec![Item::new(3, 2, 1)], 5, 4));
    }
}
