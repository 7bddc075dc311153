// dataset-core/src/models.rs
//! 数据模型定义

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 新闻真假标签，由文件所在的子目录决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    /// 处理顺序：先 fake 后 real
    pub const ALL: [Label; 2] = [Label::Fake, Label::Real];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "fake",
            Label::Real => "real",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一篇文章提取出的记录，字段顺序即 CSV 列顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub filename: String,
    pub title: String,
    pub text: String,
    pub label: Label,
}

impl Record {
    pub fn new(
        filename: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        label: Label,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            text: text.into(),
            label,
        }
    }
}

/// 无法读取或解析而被跳过的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub label: Label,
    pub reason: String,
}

/// 单个平台一次处理的结果
#[derive(Debug, Clone)]
pub struct ProcessSummary {
    pub platform: String,
    pub output: PathBuf,
    pub fake_records: usize,
    pub real_records: usize,
    /// 标题和正文都为空而被丢弃的文件名
    pub dropped: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

impl ProcessSummary {
    pub fn total_records(&self) -> usize {
        self.fake_records + self.real_records
    }
}
