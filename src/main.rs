use anyhow::Result;
use clap::Parser;
use notetaker::{
    cli::{
        handle_auth_command, handle_calendar_command, handle_recordings_command,
        handle_schedule_command, Cli, CliCommand, CliContext,
    },
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let command = match cli.command {
        Some(CliCommand::Version) => {
            println!("notetaker {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("No command given. Run `notetaker --help` for usage.");
            return Ok(());
        }
    };

    let config = Config::load()?;
    let ctx = CliContext::new(config, cli.api_url.as_deref())?;

    match command {
        CliCommand::Recordings(args) => handle_recordings_command(args, &ctx).await,
        CliCommand::Calendar(args) => handle_calendar_command(args, &ctx).await,
        CliCommand::Schedule(args) => handle_schedule_command(args, &ctx).await,
        CliCommand::Auth => handle_auth_command(&ctx).await,
        CliCommand::Version => Ok(()),
    }
}
