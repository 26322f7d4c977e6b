//! 退火算法

use super::{OptimizationResult, RunResult, TracePoint};
use crate::data::Candidate;
use crate::interfaces::{Interface, Message};
use crate::objectives::Objective;
use crate::operators::Mutate;
use crate::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::warn;
use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// 退火算法的参数，包括步数、初始温度、冷却系数
pub struct Schedule {
    pub iterations: usize,
    pub t_start: f64,
    pub cooling_rate: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            iterations: 10000,
            t_start: 100.0,
            cooling_rate: 0.99,
        }
    }
}

impl Schedule {
    pub fn new(iterations: usize, t_start: f64, cooling_rate: f64) -> Self {
        Self {
            iterations,
            t_start,
            cooling_rate,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations == 0 {
            return Err("iterations 必须为正整数".into());
        }
        if !(self.t_start.is_finite() && self.t_start > 0.0) {
            return Err(format!("t_start 必须为正数，实际为 {}", self.t_start).into());
        }
        if !(self.cooling_rate.is_finite() && self.cooling_rate > 0.0) {
            return Err(format!("cooling_rate 必须为正数，实际为 {}", self.cooling_rate).into());
        }
        if self.cooling_rate >= 1.0 {
            warn!(
                cooling_rate = self.cooling_rate,
                "冷却系数不小于 1，温度不会下降"
            );
        }
        Ok(())
    }

    /// 第 step 步（从 0 开始）降温之后的温度
    pub fn temperature_after(&self, step: usize) -> f64 {
        self.t_start * self.cooling_rate.powf((step + 1) as f64)
    }
}

/// 接受一个不更优的解的条件：`exp(delta / temperature) > threshold`
///
/// 温度下溢到零时 `0 / 0` 会得到 NaN，此时一律拒绝
pub fn accept_worse(delta: f64, temperature: f64, threshold: f64) -> bool {
    let probability = (delta / temperature).exp();
    !probability.is_nan() && probability > threshold
}

/// 一次运行中的搜索状态
#[derive(Debug, Clone)]
pub struct SearchState {
    pub current: Candidate,
    pub current_score: f64,
    pub best: Candidate,
    pub best_score: f64,
    pub best_iteration: usize,
    pub temperature: f64,
}

impl SearchState {
    pub fn new(initial: Candidate, score: f64, t_start: f64) -> Self {
        Self {
            best: initial.clone(),
            current: initial,
            current_score: score,
            best_score: score,
            best_iteration: 0,
            temperature: t_start,
        }
    }

    /// 按 Metropolis 准则决定是否用新解替换当前解，只有在新解不更优时才抽取随机数
    pub fn consider<R: Rng>(&mut self, neighbor: Candidate, score: f64, rng: &mut R) -> bool {
        let delta = score - self.current_score;
        let accepted = delta > 0.0 || accept_worse(delta, self.temperature, rng.random::<f64>());
        if accepted {
            self.current = neighbor;
            self.current_score = score;
        }
        accepted
    }

    /// 当前解严格优于最优解时更新最优解
    pub fn record_best(&mut self, iteration: usize) -> bool {
        if self.current_score > self.best_score {
            self.best.clone_from(&self.current);
            self.best_score = self.current_score;
            self.best_iteration = iteration;
            true
        } else {
            false
        }
    }

    pub fn cool(&mut self, cooling_rate: f64) {
        self.temperature *= cooling_rate;
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedAnnealing {
    pub parameters: Schedule,
    /// 每隔多少步报告一次进度，不填则不报告
    pub update_interval: Option<usize>,
}

impl SimulatedAnnealing {
    pub fn new(parameters: Schedule) -> Self {
        Self {
            parameters,
            update_interval: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.update_interval == Some(0) {
            return Err("update_interval 必须为正整数".into());
        }
        self.parameters.validate()
    }

    /// 退火算法求解的主函数
    pub fn optimize<O: Objective, F: Mutate, R: Rng>(
        &self,
        objective: &O,
        operator: &F,
        rng: &mut R,
        interface: &dyn Interface,
    ) -> Result<OptimizationResult<O::Metric>, Error> {
        self.validate()?;
        let Schedule {
            iterations,
            t_start,
            cooling_rate,
        } = self.parameters;
        interface.post(Message::Parameters {
            iterations,
            t_start,
            cooling_rate,
        });
        let start = Instant::now();

        let initial = operator.generate(objective.dimension(), rng);
        let (mut current_metric, initial_score) = objective.evaluate(&initial);
        let mut best_metric = current_metric.clone();
        let mut state = SearchState::new(initial, initial_score, t_start);
        let mut history = Vec::with_capacity(iterations);

        for step in 0..iterations {
            if let Some(interval) = self.update_interval {
                if step % interval == 0 {
                    interface.post(Message::Progress {
                        steps: step,
                        temperature: state.temperature,
                        score: state.current_score,
                    });
                }
            }
            let neighbor = operator.mutate(&state.current, state.temperature, t_start, rng);
            let (metric, score) = objective.evaluate(&neighbor);
            if state.consider(neighbor, score, rng) {
                current_metric = metric;
            }
            if state.record_best(step) {
                best_metric = current_metric.clone();
                interface.post(Message::BetterSolution {
                    iteration: step,
                    score: state.best_score,
                    metric: best_metric.to_string(),
                });
            }
            state.cool(cooling_rate);
            history.push(TracePoint {
                score: state.current_score,
                temperature: state.temperature,
            });
        }

        let elapsed_micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        interface.post(Message::Elapsed {
            time: elapsed_micros,
        });
        Ok(OptimizationResult {
            result: RunResult {
                best_score: state.best_score,
                best_iteration: state.best_iteration,
                elapsed_micros,
            },
            best: state.best,
            metric: best_metric,
            history,
            final_temperature: state.temperature,
        })
    }
}
