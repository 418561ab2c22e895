//! CLI entry point for the FIRMS fire detection service.
//!
//! Provides subcommands for serving the HTTP API and for one-shot feed
//! fetches that print and optionally persist summary statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use firms_fire_api::config::{FirmsConfig, MAX_LOOKBACK_DAYS, MIN_LOOKBACK_DAYS};
use firms_fire_api::fetch::BasicClient;
use firms_fire_api::infra::firms::FirmsAreaClient;
use firms_fire_api::output::{append_record, print_json, write_json};
use firms_fire_api::report::map_response;
use firms_fire_api::server::{self, AppState};
use firms_fire_api::services::fire_feed::HotspotFeed;
use firms_fire_api::stats::FireStats;
use std::ffi::OsStr;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "firms_fire_api")]
#[command(about = "Serve and inspect NASA FIRMS active fire detections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind the server to
        #[arg(short, long, default_value = "127.0.0.1:5476")]
        bind: SocketAddr,
    },
    /// Fetch the feed once and print summary statistics
    Fetch {
        /// Lookback window in days (defaults to FIRMS_DAYS or 3)
        #[arg(short, long)]
        days: Option<u8>,

        /// CSV file to append the summary row to
        #[arg(short, long)]
        output: Option<String>,

        /// Write the full map payload as JSON to this path
        #[arg(long)]
        dump: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/firms_fire_api.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("firms_fire_api.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let config = FirmsConfig::from_env()?;
            let default_days = config.default_days;
            let client = BasicClient::new()?;

            let state = AppState {
                feed: Arc::new(FirmsAreaClient::new(client, config)),
                default_days,
            };
            server::serve(bind, state).await?;
        }
        Commands::Fetch { days, output, dump } => {
            let config = FirmsConfig::from_env()?;
            let days = days.unwrap_or(config.default_days);
            anyhow::ensure!(
                (MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&days),
                "days must be between {MIN_LOOKBACK_DAYS} and {MAX_LOOKBACK_DAYS}, got {days}"
            );

            let client = BasicClient::new()?;
            let feed = FirmsAreaClient::new(client, config);
            run_fetch(&feed, days, output, dump).await?;
        }
    }

    Ok(())
}

/// Fetches the feed once, prints the summary, and writes any requested
/// output files.
#[tracing::instrument(skip(feed, output, dump))]
async fn run_fetch(
    feed: &impl HotspotFeed,
    days: u8,
    output: Option<String>,
    dump: Option<String>,
) -> Result<()> {
    let hotspots = feed.fetch_hotspots(days).await?;
    info!(detections = hotspots.len(), "Hotspots fetched");

    let stats = FireStats::from_hotspots(&hotspots);
    print_json(&stats)?;

    if let Some(path) = output {
        append_record(&path, &stats)?;
    }
    if let Some(path) = dump {
        write_json(&path, &map_response(&hotspots))?;
    }

    Ok(())
}
