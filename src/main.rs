//! anneal: 背包问题的模拟退火求解器［命令行版］
//!
//! 不带参数时用内置实例运行一次；`anneal benchmark` 运行参数实验。

use anneal::interfaces::command_line::{CommandLine, CommandLineArgs};
use anneal::{run, Error};
use clap::Parser;
use tracing::Level;

fn main() -> Result<(), Error> {
    let args = CommandLineArgs::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let command_line = CommandLine::new(args);
    let config = command_line.prepare_config()?;
    run(&config, &command_line)
}
