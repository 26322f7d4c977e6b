use super::{metric::Metric, Objective};
use crate::data::Problem;

/// 每超出一个单位的重量或体积扣除的分数
pub const PENALTY_FACTOR: i64 = 10;

/// 默认目标函数：选中物品的总价值减去超限惩罚
#[derive(Debug, Clone, Copy)]
pub struct PenaltyObjective<'a> {
    problem: &'a Problem,
}

impl<'a> PenaltyObjective<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// 经过 `Problem::validate` 的实例不会溢出；未检查的实例按饱和运算计算
    pub fn metric(&self, candidate: &[bool]) -> Metric {
        let (value, weight, volume) = self
            .problem
            .selected(candidate)
            .fold((0i64, 0i64, 0i64), |(value, weight, volume), (_, item)| {
                (
                    value.saturating_add(item.value),
                    weight.saturating_add(item.weight),
                    volume.saturating_add(item.volume),
                )
            });
        let overweight = weight.saturating_sub(self.problem.max_weight).max(0);
        let overvolume = volume.saturating_sub(self.problem.max_volume).max(0);
        Metric {
            value,
            weight,
            volume,
            penalty: PENALTY_FACTOR
                .saturating_mul(overweight)
                .saturating_add(PENALTY_FACTOR.saturating_mul(overvolume)),
        }
    }
}

impl Objective for PenaltyObjective<'_> {
    type Metric = Metric;

    fn dimension(&self) -> usize {
        self.problem.len()
    }

    fn evaluate(&self, candidate: &[bool]) -> (Metric, f64) {
        let metric = self.metric(candidate);
        (metric, metric.score())
    }
}
