use crate::cli::DatasetArgs;
use crate::error::{Result, WrapErr};
use dataset_core::ExtractConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// 平台目录所在的根目录
    pub base_path: PathBuf,
    /// 按顺序处理的平台
    pub platforms: Vec<String>,
    pub output_dir: PathBuf,
    pub sort_entries: bool,
}

fn default_config() -> Config {
    Config {
        base_path: PathBuf::from("Data"),
        platforms: vec!["BuzzFeed".to_string(), "PolitiFact".to_string()],
        output_dir: PathBuf::from("."),
        sort_entries: true,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// 显式指定的文件必须存在；否则依次查找工作目录和用户配置目录，都没有时使用默认值
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            let user_config_str = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Cannot read config file {}", path.display()))?;
            return Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid config file {}", path.display()));
        }

        let candidates = std::iter::once(PathBuf::from(config::constants::CONFIG_FILE_NAME))
            .chain(config::user_config_path());

        for path in candidates {
            match std::fs::read_to_string(&path) {
                Ok(user_config_str) => {
                    tracing::debug!("Using config file {}", path.display());
                    return Self::load_str(&user_config_str)
                        .wrap_err_with(|| format!("Invalid config file {}", path.display()));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(e).wrap_err_with(|| format!("Cannot read config file {}", path.display()));
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(default_config())
    }

    /// 命令行参数覆盖配置文件
    pub fn merge_args(mut self, args: &DatasetArgs) -> Config {
        if let Some(base_path) = &args.base_path {
            self.base_path = base_path.clone();
        }
        if !args.platforms.is_empty() {
            self.platforms = args.platforms.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = output_dir.clone();
        }
        if args.unsorted {
            self.sort_entries = false;
        }
        self
    }

    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            output_dir: self.output_dir.clone(),
            sort_entries: self.sort_entries,
            ..ExtractConfig::default()
        }
    }
}
