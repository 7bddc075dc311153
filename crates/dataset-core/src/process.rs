// dataset-core/src/process.rs
//! 单个平台的完整处理：扫描、写 CSV、汇总

use std::fs;
use std::path::Path;

use crate::config::ExtractConfig;
use crate::error::{DatasetError, Result};
use crate::models::ProcessSummary;
use crate::scan::scan_platform;
use crate::writer::save_csv;

/// 处理 `<base>/<platform>` 并把结果写到输出目录
///
/// 单个文件的错误不会中止处理；写出失败会作为错误返回。
pub fn process_directory(base_path: &Path, platform: &str, config: &ExtractConfig) -> Result<ProcessSummary> {
    let scan = scan_platform(base_path, platform, config)?;

    if !config.output_dir.as_os_str().is_empty() && !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir).map_err(|source| DatasetError::Io {
            path: config.output_dir.clone(),
            source,
        })?;
    }

    let output = config.output_path(platform);
    save_csv(&output, &scan.records)?;

    tracing::info!("Saved {} records to {}", scan.records.len(), output.display());

    Ok(ProcessSummary {
        platform: platform.to_string(),
        output,
        fake_records: scan.fake_records,
        real_records: scan.real_records,
        dropped: scan.dropped,
        skipped: scan.skipped,
    })
}
