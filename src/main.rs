use std::process::ExitCode;

use biblebelt::config::AppConfig;
use biblebelt::error::{CliError, ErrorCode};
use biblebelt::{cli, commands, state};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("biblebelt=info")))
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let cli = cli::Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), retryable = e.retryable(), error = ?e, "command failed");
            if e.retryable() {
                eprintln!("error: {e} (temporary; try again)");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), CliError> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let state = state::AppState::open(config)?;
    commands::dispatch(&state, cli.command).await
}
