//! Coopbooks command-line reports
//!
//! Main entry point for balance sheet and trial balance reports.

mod cli;
mod commands;
mod render;
mod snapshot;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coopbooks_shared::{AppConfig, AppError};

use crate::cli::{Cli, Command};
use crate::commands::CommandContext;

const DEFAULT_LOG_FILTER: &str = "coopbooks=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration; commands that do not need the service run without it
    let config = AppConfig::load_from(cli.config.as_deref());

    // Initialize tracing on stderr so stdout carries only the report
    let default_filter = config
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |c| c.log.filter.as_str())
        .to_string();
    let json_logs = config.as_ref().is_ok_and(|c| c.log.json);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let config = match (config, &cli.config) {
        (Ok(config), _) => Ok(config),
        // An explicitly requested file must load.
        (Err(err), Some(path)) => {
            return failure(
                &anyhow::Error::new(AppError::from(err))
                    .context(format!("Failed to load configuration from {}", path.display())),
            );
        }
        (Err(err), None) => {
            warn!(error = %err, "Configuration could not be loaded; using defaults");
            Err(err.to_string())
        }
    };

    let ctx = CommandContext { config };

    let result = match cli.command {
        Command::BalanceSheet(args) => commands::balance_sheet(&ctx, args).await,
        Command::TrialBalance(args) => commands::trial_balance(&ctx, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => failure(&err),
    }
}

fn failure(err: &anyhow::Error) -> ExitCode {
    let app_error = err.downcast_ref::<AppError>();
    debug!(
        code = app_error.map_or("INTERNAL_ERROR", AppError::error_code),
        "{err:#}"
    );
    eprintln!("error: {err:#}");
    let code = app_error.map_or(1, AppError::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
