//! 目标函数接口，以及默认目标函数的实现
//!

use std::fmt::Display;
pub mod default;
pub mod metric;

/// 对候选解打分，分数越高越好
pub trait Objective {
    type Metric: Display + Clone;

    /// 决策变量的个数，即候选解的长度
    fn dimension(&self) -> usize;

    /// 返回评测指标和分数
    fn evaluate(&self, candidate: &[bool]) -> (Self::Metric, f64);
}
