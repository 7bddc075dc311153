// dataset-core/src/config.rs
//! 提取配置

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Label;

/// 数据集提取配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ExtractConfig {
    /// 假新闻所在的子目录名
    pub fake_dir: String,
    /// 真新闻所在的子目录名
    pub real_dir: String,
    /// 需要处理的文件后缀（区分大小写）
    pub extension: String,
    /// 输出文件名后缀，前面拼接小写的平台名
    pub output_suffix: String,
    /// CSV 输出目录，默认当前工作目录
    pub output_dir: PathBuf,
    /// 按文件名排序；关闭后使用文件系统返回的顺序
    pub sort_entries: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            fake_dir: "FakeNewsContent".to_string(),
            real_dir: "RealNewsContent".to_string(),
            extension: ".json".to_string(),
            output_suffix: "_news_with_filenames.csv".to_string(),
            output_dir: PathBuf::from("."),
            sort_entries: true,
        }
    }
}

impl ExtractConfig {
    pub fn content_dir(&self, label: Label) -> &str {
        match label {
            Label::Fake => &self.fake_dir,
            Label::Real => &self.real_dir,
        }
    }

    /// `<base>/<platform>/<FakeNewsContent|RealNewsContent>`
    pub fn content_path(&self, base_path: &Path, platform: &str, label: Label) -> PathBuf {
        base_path.join(platform).join(self.content_dir(label))
    }

    pub fn output_file_name(&self, platform: &str) -> String {
        format!("{}{}", platform.to_lowercase(), self.output_suffix)
    }

    pub fn output_path(&self, platform: &str) -> PathBuf {
        self.output_dir.join(self.output_file_name(platform))
    }
}
