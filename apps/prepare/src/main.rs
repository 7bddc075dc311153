mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::Parser;

// 全程单线程顺序执行，current_thread 运行时即可
#[tokio::main(flavor = "current_thread")]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(command_line.log_level())
        .with_target(false)
        .init();

    let cfg = config::Config::load(command_line.config.as_deref())
        .wrap_err("Load configuration error")?;

    let cmd: Box<dyn command::Command> = match command_line.command.unwrap_or_default() {
        cli::Commands::Run { dataset } => {
            Box::new(command::RunCommand::new(cfg.merge_args(&dataset)))
        }
        cli::Commands::Inspect { dataset } => {
            Box::new(command::InspectCommand::new(cfg.merge_args(&dataset)))
        }
        cli::Commands::Clean { dataset } => {
            Box::new(command::CleanCommand::new(cfg.merge_args(&dataset)))
        }
    };
    cmd.execute().await?;

    Ok(())
}
