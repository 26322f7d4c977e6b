use std::fmt;
use std::io;
use std::path::PathBuf;

/// 错误类型
///
/// 求解过程本身不会出错，这里只有文件读写和配置两类错误
#[derive(Debug)]
pub enum Error {
    Io { path: PathBuf, source: io::Error },
    Csv(csv::Error),
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "无法读写文件 {}：{source}", path.display()),
            Error::Csv(e) => write!(f, "写入 CSV 失败：{e}"),
            Error::Config(message) => write!(f, "配置有误：{message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Csv(e) => Some(e),
            Error::Config(_) => None,
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Config(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Config(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Config(value.to_string())
    }
}
