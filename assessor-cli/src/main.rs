//! Assessor CLI
//!
//! Command-line frontend for the Interview Feedback Quality Assessor.
//! Shows the page heading and the health status of the backend.

mod commands;
mod config;
mod view;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assessor")]
#[command(about = "Interview Feedback Quality Assessor CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        env = "ASSESSOR_BACKEND_URL",
        default_value = assessor_client::DEFAULT_BACKEND_URL
    )]
    backend_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "ASSESSOR_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assessor=warn,assessor_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.backend_url, Duration::from_secs(cli.timeout_secs));
    config.validate().context("Invalid configuration")?;

    handle_command(cli.command, &config).await
}
