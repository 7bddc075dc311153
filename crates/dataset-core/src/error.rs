// dataset-core/src/error.rs
//! 错误类型
//!
//! [`ExtractError`] 只影响单个文件，调用方记录后跳过；
//! [`DatasetError`] 会中止当前平台的处理。

use std::path::PathBuf;
use thiserror::Error;

/// 单个 JSON 文件的读取或解析失败
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
