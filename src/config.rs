//! 运行配置。所有字段都有默认值，配置文件只需要写出想改动的部分。
//!

use crate::benchmark::BenchmarkConfig;
use crate::data::Problem;
use crate::optimizers::simulated_annealing::SimulatedAnnealing;
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Single,
    Benchmark,
}

impl Default for Mode {
    /// 默认模式在编译时由 `benchmark` 特性决定
    fn default() -> Self {
        if cfg!(feature = "benchmark") {
            Mode::Benchmark
        } else {
            Mode::Single
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 单次运行的轨迹文件
    pub output_path: PathBuf,
    /// 参数实验日志
    pub benchmark_output_path: PathBuf,
    pub mode: Mode,
    /// 随机数种子，不填则由当前时间生成
    pub seed: Option<u64>,
    /// 不填则使用内置的实例
    pub problem: Option<Problem>,
    pub optimization: SimulatedAnnealing,
    pub benchmark: BenchmarkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("wyniki.csv"),
            benchmark_output_path: PathBuf::from("benchmark_wyniki.csv"),
            mode: Mode::default(),
            seed: None,
            problem: None,
            optimization: SimulatedAnnealing::default(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(problem) = &self.problem {
            problem.validate()?;
        }
        match self.mode {
            Mode::Single => self.optimization.validate(),
            Mode::Benchmark => self.benchmark.validate(),
        }
    }

    pub fn problem(&self) -> Problem {
        self.problem.clone().unwrap_or_default()
    }
}
