//! 结果文件的写入：单次运行的轨迹文件和参数实验日志
//!

use crate::optimizers::simulated_annealing::Schedule;
use crate::optimizers::{RunResult, TracePoint};
use crate::Error;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TRACE_HEADER: [&str; 3] = ["iteracja", "wynik", "temperatura"];

pub const BENCHMARK_HEADER: [&str; 7] = [
    "run",
    "iterations",
    "bestScore",
    "bestIteration",
    "tempStart",
    "coolingRate",
    "timeMicros",
];

#[derive(Serialize)]
struct TraceRecord {
    index: usize,
    score: f64,
    temperature: f64,
}

#[derive(Serialize)]
struct BenchmarkRecord {
    run: usize,
    iterations: usize,
    best_score: f64,
    best_iteration: usize,
    t_start: f64,
    cooling_rate: f64,
    elapsed_micros: u64,
}

/// 覆盖写入一次运行的轨迹：每一步的当前分数和温度
pub fn write_trace(path: &Path, history: &[TracePoint]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(TRACE_HEADER)?;
    for (index, point) in history.iter().enumerate() {
        writer.serialize(TraceRecord {
            index,
            score: point.score,
            temperature: point.temperature,
        })?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), rows = history.len(), "轨迹已写入");
    Ok(())
}

/// 参数实验日志，只追加不覆盖
///
/// 只有打开时文件尚不存在才写表头；运行编号从 0 开始在整个实验中递增
pub struct BenchmarkLog {
    writer: Writer<File>,
    path: PathBuf,
    next_run: usize,
}

impl BenchmarkLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let exists = path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if !exists {
            writer.write_record(BENCHMARK_HEADER)?;
        }
        Ok(Self {
            writer,
            path,
            next_run: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一行，返回这一行的运行编号
    pub fn append(&mut self, schedule: &Schedule, result: &RunResult) -> Result<usize, Error> {
        let run = self.next_run;
        self.writer.serialize(BenchmarkRecord {
            run,
            iterations: schedule.iterations,
            best_score: result.best_score,
            best_iteration: result.best_iteration,
            t_start: schedule.t_start,
            cooling_rate: schedule.cooling_rate,
            elapsed_micros: result.elapsed_micros,
        })?;
        self.next_run += 1;
        Ok(run)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use tempfile::tempdir;

    fn result(best_score: f64, best_iteration: usize) -> RunResult {
        RunResult {
            best_score,
            best_iteration,
            elapsed_micros: 12,
        }
    }

    #[test]
    fn trace_has_header_and_one_row_per_step() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wyniki.csv");
        let history = [
            TracePoint {
                score: 10.0,
                temperature: 99.0,
            },
            TracePoint {
                score: -4.0,
                temperature: 98.01,
            },
        ];
        write_trace(&path, &history).unwrap();
        let content = read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["iteracja,wynik,temperatura", "0,10.0,99.0", "1,-4.0,98.01"]);
    }

    #[test]
    fn trace_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wyniki.csv");
        let point = TracePoint {
            score: 1.0,
            temperature: 1.0,
        };
        write_trace(&path, &[point, point, point]).unwrap();
        write_trace(&path, &[point]).unwrap();
        assert_eq!(read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn trace_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("wyniki.csv");
        assert!(matches!(write_trace(&path, &[]), Err(Error::Io { .. })));
    }

    #[test]
    fn benchmark_header_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("benchmark_wyniki.csv");
        let schedule = Schedule::new(300, 100.0, 0.99);
        {
            let mut log = BenchmarkLog::open(&path).unwrap();
            assert_eq!(log.append(&schedule, &result(57.0, 12)).unwrap(), 0);
            assert_eq!(log.append(&schedule, &result(55.0, 3)).unwrap(), 1);
            log.flush().unwrap();
        }
        {
            let mut log = BenchmarkLog::open(&path).unwrap();
            log.append(&schedule, &result(57.0, 40)).unwrap();
            log.flush().unwrap();
        }
        let content = read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "run,iterations,bestScore,bestIteration,tempStart,coolingRate,timeMicros"
        );
        assert_eq!(lines[1], "0,300,57.0,12,100.0,0.99,12");
        assert_eq!(lines[3], "0,300,57.0,40,100.0,0.99,12");
    }
}
