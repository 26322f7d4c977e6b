//! 参数实验：依次改变步数、初始温度和冷却系数，每组参数重复多次，结果逐行追加到日志
//!

use crate::data::Problem;
use crate::interfaces::Silent;
use crate::io::BenchmarkLog;
use crate::objectives::default::PenaltyObjective;
use crate::operators::default::TemperatureFlip;
use crate::optimizers::simulated_annealing::{Schedule, SimulatedAnnealing};
use crate::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 一组参数及其重复次数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepEntry {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub repeats: usize,
}

/// 一个实验阶段，只改变一个参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub name: String,
    pub entries: Vec<SweepEntry>,
}

impl Sweep {
    fn varying(name: &str, schedules: impl IntoIterator<Item = Schedule>, repeats: usize) -> Self {
        Self {
            name: name.to_string(),
            entries: schedules
                .into_iter()
                .map(|schedule| SweepEntry { schedule, repeats })
                .collect(),
        }
    }

    pub fn runs(&self) -> usize {
        self.entries.iter().map(|entry| entry.repeats).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub sweeps: Vec<Sweep>,
}

const REPEATS: usize = 100;
const FIXED_ITERATIONS: usize = 300;
const FIXED_T_START: f64 = 100.0;
const FIXED_COOLING_RATE: f64 = 0.99;

impl Default for BenchmarkConfig {
    fn default() -> Self {
        let iterations = Sweep::varying(
            "iterations",
            [100, 150, 200, 300, 500]
                .map(|iterations| Schedule::new(iterations, FIXED_T_START, FIXED_COOLING_RATE)),
            REPEATS,
        );
        let t_start = Sweep::varying(
            "t_start",
            [10.0, 50.0, 100.0, 200.0, 500.0]
                .map(|t_start| Schedule::new(FIXED_ITERATIONS, t_start, FIXED_COOLING_RATE)),
            REPEATS,
        );
        let cooling_rate = Sweep::varying(
            "cooling_rate",
            [0.999, 0.995, 0.99, 0.98, 0.95]
                .map(|rate| Schedule::new(FIXED_ITERATIONS, FIXED_T_START, rate)),
            REPEATS,
        );
        Self {
            sweeps: vec![iterations, t_start, cooling_rate],
        }
    }
}

impl BenchmarkConfig {
    pub fn runs(&self) -> usize {
        self.sweeps.iter().map(Sweep::runs).sum()
    }

    pub fn validate(&self) -> Result<(), Error> {
        for sweep in &self.sweeps {
            for entry in &sweep.entries {
                entry
                    .schedule
                    .validate()
                    .map_err(|e| Error::Config(format!("实验 {} 中：{e}", sweep.name)))?;
            }
        }
        Ok(())
    }
}

/// 依次执行所有实验阶段，返回本次写入日志的行数
pub fn run_benchmark<R: Rng>(
    problem: &Problem,
    config: &BenchmarkConfig,
    rng: &mut R,
    log: &mut BenchmarkLog,
) -> Result<usize, Error> {
    config.validate()?;
    let objective = PenaltyObjective::new(problem);
    let mut rows = 0;
    for sweep in &config.sweeps {
        info!(sweep = %sweep.name, runs = sweep.runs(), "开始实验");
        for entry in &sweep.entries {
            let solver = SimulatedAnnealing::new(entry.schedule);
            for _ in 0..entry.repeats {
                let outcome = solver.optimize(&objective, &TemperatureFlip, rng, &Silent)?;
                let run = log.append(&entry.schedule, &outcome.result)?;
                debug!(run, best_score = outcome.result.best_score, "完成一次运行");
                rows += 1;
            }
        }
        log.flush()?;
    }
    info!(rows, path = %log.path().display(), "实验结束");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_sweeps_of_500_runs() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.sweeps.len(), 3);
        assert!(config.sweeps.iter().all(|sweep| sweep.runs() == 500));
        assert_eq!(config.runs(), 1500);
        assert!(config.validate().is_ok());
        let t_start = &config.sweeps[1];
        assert!(t_start
            .entries
            .iter()
            .all(|entry| entry.schedule.iterations == 300 && entry.schedule.cooling_rate == 0.99));
    }

    #[test]
    fn entries_read_flat_from_yaml() {
        let text = "sweeps:\n  - name: quick\n    entries:\n      - {iterations: 5, t_start: 1.0, cooling_rate: 0.5, repeats: 2}\n";
        let config: BenchmarkConfig = serde_yaml::from_str(text).unwrap();
        assert_eq!(config.runs(), 2);
        assert_eq!(config.sweeps[0].entries[0].schedule, Schedule::new(5, 1.0, 0.5));
    }

    #[test]
    fn invalid_entry_names_its_sweep() {
        let config = BenchmarkConfig {
            sweeps: vec![Sweep::varying("broken", [Schedule::new(0, 1.0, 0.5)], 1)],
        };
        match config.validate() {
            Err(Error::Config(message)) => assert!(message.contains("broken")),
            _ => panic!("expected a config error"),
        }
    }
}
