//! 优化方法，以及优化结果的定义
//!

use crate::data::Candidate;
pub mod simulated_annealing;

/// 一次运行的结果摘要，也是参数实验日志中的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub best_score: f64,
    pub best_iteration: usize,
    pub elapsed_micros: u64,
}

/// 每一步结束时的当前分数和降温后的温度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub score: f64,
    pub temperature: f64,
}

pub struct OptimizationResult<M> {
    pub result: RunResult,
    pub best: Candidate,
    pub metric: M,
    pub history: Vec<TracePoint>,
    pub final_temperature: f64,
}
