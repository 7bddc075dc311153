// apps/prepare/src/command/run.rs
//! 提取所有平台并写出 CSV

use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr, error};
use dataset_core::{DatasetExtractor, ProcessSummary};
use tracing::{info, warn};

pub struct RunCommand {
    config: Config,
}

impl RunCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 逐个平台处理；任一平台写出失败即停止，之前写出的文件保留
    pub fn run(&self) -> Result<Vec<ProcessSummary>> {
        if self.config.platforms.is_empty() {
            return Err(error!("No platforms configured"));
        }

        let extractor = DatasetExtractor::new(&self.config.base_path, self.config.extract_config());
        let mut summaries = Vec::with_capacity(self.config.platforms.len());

        for platform in &self.config.platforms {
            let summary = extractor
                .process(platform)
                .wrap_err_with(|| format!("Failed to build dataset for {platform}"))?;

            if !summary.skipped.is_empty() {
                warn!("{}: skipped {} unreadable files", platform, summary.skipped.len());
            }
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

#[async_trait::async_trait]
impl Command for RunCommand {
    async fn execute(&self) -> Result<()> {
        let summaries = self.run()?;
        let total: usize = summaries.iter().map(ProcessSummary::total_records).sum();
        info!("Finished {} platforms, {} records in total", summaries.len(), total);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(data: &TempDir, out: PathBuf) -> Config {
        Config {
            base_path: data.path().to_path_buf(),
            output_dir: out,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_default_platforms_are_written() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let fake = data.path().join("BuzzFeed").join("FakeNewsContent");
        fs::create_dir_all(&fake).unwrap();
        fs::write(fake.join("a.json"), r#"{"title":"X","text":""}"#).unwrap();

        RunCommand::new(config_for(&data, out.path().to_path_buf()))
            .execute()
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(out.path().join("buzzfeed_news_with_filenames.csv")).unwrap(),
            "filename,title,text,label\na.json,X,,fake\n"
        );
        assert!(out.path().join("politifact_news_with_filenames.csv").exists());
    }

    #[test]
    fn test_write_failure_stops_the_run() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let blocker = out.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let result = RunCommand::new(config_for(&data, blocker)).run();
        let message = format!("{:?}", result.unwrap_err());
        assert!(message.contains("BuzzFeed"));
    }

    #[test]
    fn test_empty_platform_list_is_rejected() {
        let data = TempDir::new().unwrap();
        let mut config = config_for(&data, data.path().to_path_buf());
        config.platforms.clear();

        assert!(RunCommand::new(config).run().is_err());
    }
}
