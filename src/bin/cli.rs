//! LTI Tracker CLI
//!
//! Local execution entry point. For AWS Lambda, use `lti-tracker-lambda`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lti_tracker::{config, error::Result, pipeline};

/// LTI Tracker - RSI ship sales with Lifetime Insurance
#[derive(Parser, Debug)]
#[command(
    name = "lti-tracker",
    version,
    about = "Announce RSI store ships on sale with Lifetime Insurance"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch ships on sale and post them to the webhook
    Run {
        /// Log the payload instead of posting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("LTI Tracker starting...");

    let config_path = cli
        .config
        .or_else(|| std::env::var(lti_tracker::models::env::CONFIG_PATH).ok().map(PathBuf::from));
    let config = config::load_with(config_path.as_deref(), |key| std::env::var(key).ok())?;

    match cli.command {
        Command::Run { dry_run } => {
            let report = pipeline::run_tracker(&config, dry_run).await?;
            log::info!(
                "Run complete: {} candidate(s), {} ship(s), delivery {}",
                report.candidate_count,
                report.ship_count,
                report.delivery.label()
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            log::info!("✓ Config OK (GraphQL endpoint {})", config.store.graphql_url());

            match config.discord.require_webhook() {
                Ok(_) => log::info!("✓ Webhook configured"),
                Err(e) => log::warn!("{e}; only dry runs are possible"),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
