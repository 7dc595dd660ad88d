use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use teamrank::app::location::Location;
use teamrank::app::state::{AppState, ViewSettings};
use teamrank::stats::StatsClient;
use teamrank::util::config::AppConfig;
use teamrank::util::date::parse_display_date;

#[derive(Parser, Debug)]
#[command(name = "teamrank", version, about = "TUI team contribution rankings")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start at a location, e.g. "/member/alice?from=01%2F08%2F2025&to=31%2F08%2F2025"
    #[arg(short, long, conflicts_with = "member")]
    location: Option<String>,

    /// Open a member's activity instead of the rankings
    #[arg(short, long)]
    member: Option<String>,

    /// Start of the date range (DD/MM/YYYY)
    #[arg(long)]
    from: Option<String>,

    /// End of the date range (DD/MM/YYYY)
    #[arg(long)]
    to: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("teamrank starting");

    let location = initial_location(&cli)?;
    info!(location = %location, "Mounting");

    let client = StatsClient::new(&config.api.base_url, config.api.timeout_secs)?;
    let state = AppState::new(ViewSettings::from_config(&config), location);

    teamrank::app::event_loop::run(state, client).await
}

fn initial_location(cli: &Cli) -> Result<Location> {
    let mut location = match (&cli.location, &cli.member) {
        (Some(raw), _) => Location::parse(raw)?,
        (None, Some(member)) => Location::member(member.clone()),
        (None, None) => Location::root(),
    };

    if let Some(ref from) = cli.from {
        parse_display_date(from).context("--from must be DD/MM/YYYY")?;
        location.from = Some(from.clone());
    }
    if let Some(ref to) = cli.to {
        parse_display_date(to).context("--to must be DD/MM/YYYY")?;
        location.to = Some(to.clone());
    }

    Ok(location)
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "teamrank.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("teamrank=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
