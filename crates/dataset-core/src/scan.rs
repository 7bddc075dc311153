// dataset-core/src/scan.rs
//! 目录扫描：列出内容目录下的 JSON 文件并逐个提取

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ExtractConfig;
use crate::error::{DatasetError, ExtractError, Result};
use crate::extract::{extract, file_name, report_failure};
use crate::models::{Label, Record, SkippedFile};

/// 一个平台的扫描结果，尚未写盘
#[derive(Debug, Default)]
pub struct PlatformScan {
    /// 先 fake 后 real
    pub records: Vec<Record>,
    pub fake_records: usize,
    pub real_records: usize,
    pub dropped: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

impl PlatformScan {
    pub fn files_seen(&self) -> usize {
        self.records.len() + self.dropped.len() + self.skipped.len()
    }

    fn skip(&mut self, path: PathBuf, label: Label, err: &ExtractError) {
        self.skipped.push(SkippedFile {
            reason: err.to_string(),
            path,
            label,
        });
    }
}

/// 目录中的一项：可读取的文件，或在列目录时就无法访问的文件（如悬空的符号链接）
#[derive(Debug)]
pub enum ContentEntry {
    File(PathBuf),
    Unreadable { path: PathBuf, error: ExtractError },
}

fn has_extension(path: &Path, config: &ExtractConfig) -> bool {
    file_name(path).ends_with(config.extension.as_str())
}

/// 列出目录下（不递归）以指定后缀结尾的普通文件
///
/// 只有目录本身无法读取时才返回错误；单个条目的错误作为 [`ContentEntry::Unreadable`] 返回。
pub fn list_content_files(dir: &Path, config: &ExtractConfig) -> Result<Vec<ContentEntry>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
    if config.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(DatasetError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(source) => {
                let path = source.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                if has_extension(&path, config) {
                    entries.push(ContentEntry::Unreadable {
                        path,
                        error: ExtractError::Io(source.into()),
                    });
                } else {
                    tracing::debug!("Ignoring unreadable entry {:?}: {}", path, source);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.path(), config) {
            entries.push(ContentEntry::File(entry.into_path()));
        }
    }

    Ok(entries)
}

/// 扫描 `<base>/<platform>` 下的两个内容目录
///
/// 不存在的目录按零个文件处理；单个文件的失败记录到 `skipped` 后继续。
pub fn scan_platform(base_path: &Path, platform: &str, config: &ExtractConfig) -> Result<PlatformScan> {
    let mut scan = PlatformScan::default();

    for label in Label::ALL {
        let dir = config.content_path(base_path, platform, label);
        if !dir.is_dir() {
            tracing::debug!("{:?} does not exist, skipping", dir);
            continue;
        }

        let entries = list_content_files(&dir, config)?;
        tracing::debug!("Found {} {} files in {:?}", entries.len(), label, dir);

        for entry in entries {
            let path = match entry {
                ContentEntry::File(path) => path,
                ContentEntry::Unreadable { path, error } => {
                    report_failure(&path, &error);
                    scan.skip(path, label, &error);
                    continue;
                }
            };

            match extract(&path, label) {
                Ok(Some(record)) => {
                    match label {
                        Label::Fake => scan.fake_records += 1,
                        Label::Real => scan.real_records += 1,
                    }
                    scan.records.push(record);
                }
                Ok(None) => scan.dropped.push(file_name(&path)),
                Err(e) => scan.skip(path, label, &e),
            }
        }
    }

    Ok(scan)
}
