use super::{Interface, Message};
use crate::config::{Config, Mode};
use crate::data::Problem;
use crate::objectives::metric::Metric;
use crate::optimizers::OptimizationResult;
use crate::Error;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 命令行参数的定义
#[derive(Parser, Clone, Debug)]
#[command(name = "anneal")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// 配置文件，不提供则使用内置参数
    pub config: Option<PathBuf>,
    /// 随机数种子，不提供则由当前时间生成
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// 轨迹文件，默认为 wyniki.csv
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// 参数实验日志，默认为 benchmark_wyniki.csv
    #[arg(short, long, value_name = "FILE")]
    pub benchmark_output: Option<PathBuf>,
    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

/// 命令行中所有可用的子命令，不提供时使用配置中的模式
///
/// 子命令必须写在配置文件之后，例如 `anneal config.yaml benchmark`
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// 用配置中的参数运行一次退火，打印结果并写出轨迹
    Solve,
    /// 运行全部参数实验，结果追加到实验日志
    Benchmark,
}

/// 通过命令行来使用退火求解器的入口，实现了界面特征
pub struct CommandLine {
    pub args: CommandLineArgs,
}

impl CommandLine {
    pub fn new(args: CommandLineArgs) -> Self {
        Self { args }
    }

    /// 读取配置文件，再用命令行参数覆盖
    pub fn prepare_config(&self) -> Result<Config, Error> {
        let CommandLineArgs {
            command,
            config,
            seed,
            output,
            benchmark_output,
            ..
        } = self.args.clone();
        let mut config = match config {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        match command {
            Some(Command::Solve) => config.mode = Mode::Single,
            Some(Command::Benchmark) => config.mode = Mode::Benchmark,
            None => {}
        }
        if seed.is_some() {
            config.seed = seed;
        }
        if let Some(path) = output {
            config.output_path = path;
        }
        if let Some(path) = benchmark_output {
            config.benchmark_output_path = path;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn report_solution(&self, problem: &Problem, outcome: &OptimizationResult<Metric>) {
        let selected = problem
            .selected(&outcome.best)
            .map(|(index, item)| {
                format!(
                    "- 物品 {index} [value={}, weight={}, volume={}]",
                    item.value, item.weight, item.volume
                )
            })
            .join("\n");
        println!("最优分数：{}", outcome.result.best_score);
        println!("出现在第 {} 步", outcome.result.best_iteration);
        print!("{}", outcome.metric);
        println!("选中的物品：");
        if !selected.is_empty() {
            println!("{selected}");
        }
    }

    pub fn report_trace(&self, path: &Path) {
        println!("每一步的分数和温度保存在 {} 中", path.display());
    }

    pub fn report_benchmark(&self, path: &Path, rows: usize) {
        println!("实验结束，{rows} 次运行的结果已追加到 {} 中", path.display());
    }
}

impl Interface for CommandLine {
    fn post(&self, message: Message) {
        match message {
            Message::Parameters {
                iterations,
                t_start,
                cooling_rate,
            } => println!("共 {iterations} 步，从温度 {t_start} 开始，每步乘以 {cooling_rate}……"),
            Message::Progress {
                steps,
                temperature,
                score,
            } => println!("已执行 {steps} 步，当前温度为 {temperature:.2e}，当前分数为 {score}"),
            Message::BetterSolution {
                iteration,
                score,
                metric,
            } => debug!(iteration, score, "搜索到了一个更好的方案：{}", metric.trim_end()),
            Message::Elapsed { time } => println!("用时：{time} μs"),
        }
    }
}
