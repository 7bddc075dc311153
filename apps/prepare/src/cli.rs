use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (defaults to ./prepare.toml, then the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::WARN;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Overrides shared by every subcommand
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct DatasetArgs {
    /// Directory holding one sub-directory per platform
    #[arg(short, long, value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Platform to process; repeat for several (e.g. -p BuzzFeed -p PolitiFact)
    #[arg(short, long = "platform", value_name = "NAME")]
    pub platforms: Vec<String>,

    /// Where the CSV files are written
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep file-system listing order instead of sorting by file name
    #[arg(long)]
    pub unsorted: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Extract every configured platform and write one CSV per platform (default)
    Run {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Dry run: report what would be extracted without writing anything
    Inspect {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Remove previously generated CSV files
    Clean {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            dataset: DatasetArgs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("prepare").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_means_default_run() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command.unwrap_or_default(), Commands::default());
    }

    #[test]
    fn test_run_overrides() {
        let cli = parse(&["run", "-b", "corpus", "-p", "BuzzFeed", "-p", "Gossip", "-o", "out", "--unsorted"]);
        let Some(Commands::Run { dataset }) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(dataset.base_path, Some(PathBuf::from("corpus")));
        assert_eq!(dataset.platforms, vec!["BuzzFeed", "Gossip"]);
        assert_eq!(dataset.output_dir, Some(PathBuf::from("out")));
        assert!(dataset.unsorted);
    }

    #[rstest]
    #[case(&[], tracing::Level::INFO)]
    #[case(&["-v"], tracing::Level::DEBUG)]
    #[case(&["-vv", "inspect"], tracing::Level::TRACE)]
    #[case(&["clean", "-q"], tracing::Level::WARN)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: tracing::Level) {
        assert_eq!(parse(args).log_level(), expected);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["prepare", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
