//! 使用模拟退火算法求解带重量和体积两个约束的 0/1 背包问题，并可以批量运行参数实验。
//!
//! anneal 是使用本库实现的命令行程序：默认用内置实例运行一次退火，打印最优方案并写出每一步的轨迹；
//! 参数实验模式下依次改变步数、初始温度和冷却系数，把每次运行的结果追加到实验日志中。

pub mod benchmark;
pub mod config;
pub mod data;
pub mod error;
pub mod interfaces;
pub mod io;
pub mod objectives;
pub mod operators;
pub mod optimizers;

pub use error::Error;
pub use objectives::metric::Metric;

use benchmark::run_benchmark;
use chrono::Utc;
use config::{Config, Mode};
use data::Problem;
use interfaces::command_line::CommandLine;
use io::{write_trace, BenchmarkLog};
use objectives::default::PenaltyObjective;
use operators::default::TemperatureFlip;
use optimizers::RunResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// 由当前时间生成随机数种子
pub fn seed_from_clock() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// 按配置中的模式运行，整个进程只使用一个随机数生成器
pub fn run(config: &Config, command_line: &CommandLine) -> Result<(), Error> {
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    info!(seed, mode = ?config.mode, "随机数种子");
    let mut rng = StdRng::seed_from_u64(seed);
    let problem = config.problem();
    match config.mode {
        Mode::Single => {
            run_single(&problem, config, &mut rng, command_line)?;
        }
        Mode::Benchmark => {
            let mut log = BenchmarkLog::open(&config.benchmark_output_path)?;
            let rows = run_benchmark(&problem, &config.benchmark, &mut rng, &mut log)?;
            command_line.report_benchmark(log.path(), rows);
        }
    }
    Ok(())
}

/// 运行一次退火，向命令行报告结果并覆盖写出轨迹文件
pub fn run_single<R: Rng>(
    problem: &Problem,
    config: &Config,
    rng: &mut R,
    command_line: &CommandLine,
) -> Result<RunResult, Error> {
    let objective = PenaltyObjective::new(problem);
    let outcome = config
        .optimization
        .optimize(&objective, &TemperatureFlip, rng, command_line)?;
    command_line.report_solution(problem, &outcome);
    write_trace(&config.output_path, &outcome.history)?;
    command_line.report_trace(&config.output_path);
    Ok(outcome.result)
}
