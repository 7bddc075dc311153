// dataset-core/src/extract.rs
//! 文本提取模块

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ExtractError;
use crate::models::{Label, Record};

/// 读取字符串字段；缺失或不是字符串时视为空
fn string_field<'a>(content: &'a Value, key: &str) -> &'a str {
    content.get(key).and_then(Value::as_str).unwrap_or("")
}

/// 文件名（不含目录）
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// 从 JSON 文件提取一条记录
///
/// 标题和正文都为空时返回 `Ok(None)`。
pub fn read_record(path: &Path, label: Label) -> Result<Option<Record>, ExtractError> {
    let bytes = fs::read(path)?;
    let content: Value = serde_json::from_slice(&bytes)?;

    let title = string_field(&content, "title");
    let text = string_field(&content, "text");

    if title.is_empty() && text.is_empty() {
        tracing::debug!("Dropping {:?}: empty title and text", path);
        return Ok(None);
    }

    Ok(Some(Record::new(file_name(path), title, text, label)))
}

pub(crate) fn report_failure(path: &Path, err: &ExtractError) {
    tracing::warn!("Error reading {}: {}", file_name(path), err);
}

/// 提取记录；失败时先输出诊断再把错误交给调用方记账，调用方不应中止
pub fn extract(path: &Path, label: Label) -> Result<Option<Record>, ExtractError> {
    read_record(path, label).inspect_err(|e| report_failure(path, e))
}
