// apps/prepare/src/command/inspect.rs
//! 试运行：统计每个平台会提取出什么，不写任何文件

use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use dataset_core::{DatasetExtractor, PlatformScan};

pub struct InspectCommand {
    config: Config,
}

impl InspectCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn render(platform: &str, output: &str, scan: &PlatformScan) -> String {
        let mut report = String::new();
        report.push_str(&format!("📂 {platform}\n"));
        report.push_str(&format!("  files     {}\n", scan.files_seen()));
        report.push_str(&format!("  fake      {}\n", scan.fake_records));
        report.push_str(&format!("  real      {}\n", scan.real_records));
        report.push_str(&format!("  dropped   {}\n", scan.dropped.len()));
        report.push_str(&format!("  skipped   {}\n", scan.skipped.len()));
        for skipped in &scan.skipped {
            report.push_str(&format!(
                "    ❌ [{}] {}: {}\n",
                skipped.label,
                skipped.path.display(),
                skipped.reason
            ));
        }
        report.push_str(&format!("  output    {output}\n"));
        report
    }
}

#[async_trait::async_trait]
impl Command for InspectCommand {
    async fn execute(&self) -> Result<()> {
        let extractor = DatasetExtractor::new(&self.config.base_path, self.config.extract_config());

        println!("🔍 Base path: {}", extractor.base_path().display());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        for platform in &self.config.platforms {
            let scan = extractor
                .scan(platform)
                .wrap_err_with(|| format!("Failed to scan {platform}"))?;
            let output = extractor.output_path(platform);
            print!("{}", Self::render(platform, &output.display().to_string(), &scan));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_core::{ExtractConfig, scan_platform};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_lists_skipped_files() {
        let data = TempDir::new().unwrap();
        let fake = data.path().join("BuzzFeed").join("FakeNewsContent");
        fs::create_dir_all(&fake).unwrap();
        fs::write(fake.join("a.json"), r#"{"title":"A"}"#).unwrap();
        fs::write(fake.join("c.json"), "{bad").unwrap();

        let scan = scan_platform(data.path(), "BuzzFeed", &ExtractConfig::default()).unwrap();
        let report = InspectCommand::render("BuzzFeed", "buzzfeed_news_with_filenames.csv", &scan);

        assert!(report.contains("fake      1"));
        assert!(report.contains("skipped   1"));
        assert!(report.contains("c.json"));
        assert!(report.contains("output    buzzfeed_news_with_filenames.csv"));
    }

    #[tokio::test]
    async fn test_inspect_writes_nothing() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let real = data.path().join("PolitiFact").join("RealNewsContent");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("b.json"), r#"{"text":"B"}"#).unwrap();

        let config = Config {
            base_path: data.path().to_path_buf(),
            output_dir: out.path().to_path_buf(),
            ..Config::default()
        };
        InspectCommand::new(config).execute().await.unwrap();

        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
