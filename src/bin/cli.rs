//! tagstat CLI
//!
//! Fetches a Codeforces handle's contest history and prints per-tag
//! unsolved statistics.

use std::path::Path;

use clap::Parser;
use tagstat::{error::Result, models::Config, pipeline, services::ApiClient};

/// Default config file looked up in the working directory.
const CONFIG_PATH: &str = "tagstat.toml";

/// tagstat - Codeforces tag statistics
#[derive(Parser, Debug)]
#[command(
    name = "tagstat",
    version,
    about = "Compute per-tag unsolved statistics for a Codeforces handle"
)]
struct Cli {
    /// Codeforces handle to analyze
    #[arg(long)]
    handler: String,
}

/// Initialize logging from the environment.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    log::debug!("Start");

    let config = Config::load_or_default(Path::new(CONFIG_PATH));
    config.validate()?;

    let client = ApiClient::new(&config)?;
    let outcome = pipeline::run_analysis(&client, &cli.handler).await?;

    println!();
    print!("{}", pipeline::render(&outcome.counters));

    let stats = &outcome.stats;
    log::info!(
        "Analyzed {} of {} contests ({} participated) in {}s",
        stats.analyzed_count,
        stats.contest_count,
        stats.participated_count,
        (stats.end_time - stats.start_time).num_seconds()
    );

    Ok(())
}
