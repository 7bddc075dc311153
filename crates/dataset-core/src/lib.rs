// dataset-core/src/lib.rs
//! 新闻数据集提取核心库
//!
//! 遍历 `<base>/<platform>/{FakeNewsContent,RealNewsContent}/*.json`，
//! 提取 `title`、`text` 并按目录打上 fake/real 标签，每个平台写出一个 CSV：
//! - 单个文件解析失败只记录并跳过
//! - 标题和正文都为空的文档被丢弃
//! - 写出失败会中止当前平台

use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod process;
pub mod scan;
pub mod writer;

// 重导出核心类型
pub use config::ExtractConfig;
pub use error::{DatasetError, ExtractError, Result};
pub use extract::{extract, read_record};
pub use models::{Label, ProcessSummary, Record, SkippedFile};
pub use process::process_directory;
pub use scan::{ContentEntry, PlatformScan, list_content_files, scan_platform};
pub use writer::{CSV_HEADER, save_csv, write_records};

/// 数据集提取统一入口
#[derive(Debug, Clone)]
pub struct DatasetExtractor {
    base_path: PathBuf,
    config: ExtractConfig,
}

impl DatasetExtractor {
    pub fn new(base_path: impl Into<PathBuf>, config: ExtractConfig) -> Self {
        Self {
            base_path: base_path.into(),
            config,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// 只扫描不写盘
    pub fn scan(&self, platform: &str) -> Result<PlatformScan> {
        scan_platform(&self.base_path, platform, &self.config)
    }

    /// 扫描并写出该平台的 CSV
    pub fn process(&self, platform: &str) -> Result<ProcessSummary> {
        process_directory(&self.base_path, platform, &self.config)
    }

    /// 按顺序处理多个平台，遇到第一个错误即返回；已写出的文件保留
    pub fn process_all<I, S>(&self, platforms: I) -> Result<Vec<ProcessSummary>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        platforms
            .into_iter()
            .map(|platform| self.process(platform.as_ref()))
            .collect()
    }

    pub fn output_path(&self, platform: &str) -> PathBuf {
        self.config.output_path(platform)
    }
}
