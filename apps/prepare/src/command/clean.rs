// apps/prepare/src/command/clean.rs
//! 删除已生成的 CSV 文件

use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use std::fs;
use std::path::Path;

pub struct CleanCommand {
    config: Config,
}

impl CleanCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 删除单个文件，返回其大小；文件不存在时返回 None
    fn remove_output(path: &Path) -> Result<Option<u64>> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {
                fs::remove_file(path)
                    .wrap_err_with(|| format!("Cannot remove {}", path.display()))?;
                Ok(Some(metadata.len()))
            }
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| format!("Cannot access {}", path.display())),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.2} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.2} KB", bytes as f64 / KB as f64)
        } else {
            format!("{} bytes", bytes)
        }
    }

    fn clean(&self) -> Result<(usize, u64)> {
        let extract = self.config.extract_config();
        let mut removed = 0;
        let mut total_bytes = 0u64;

        for platform in &self.config.platforms {
            let path = extract.output_path(platform);
            match Self::remove_output(&path)? {
                Some(size) => {
                    println!("  ✅ {} ({})", path.display(), Self::format_size(size));
                    removed += 1;
                    total_bytes += size;
                }
                None => println!("  ⏭️  {} does not exist", path.display()),
            }
        }

        Ok((removed, total_bytes))
    }
}

#[async_trait::async_trait]
impl Command for CleanCommand {
    async fn execute(&self) -> Result<()> {
        println!("🗑️  Removing generated datasets");
        let (removed, total_bytes) = self.clean()?;
        println!("✨ Removed {} files, {} freed", removed, Self::format_size(total_bytes));
        Ok(())
    }
}
