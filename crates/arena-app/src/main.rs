//! Leaderboard arena - entry point.
//!
//! `arena rank` prints one board; `arena serve` runs the HTTP API.

use anyhow::Result;
use arena_app::{render, AppConfig, Application, OutputFormat};
use arena_core::{PopularityMetric, SortKey, ViewMode};
use arena_ranking::RankOptions;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

/// Leaderboard arena
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via ARENA_CONFIG env var)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a roster and print the board
    Rank {
        /// Board: score, scale, popularity or pnl
        #[arg(long, default_value = "score")]
        view: String,
        /// Pin this bot (id or name fragment) to the top
        #[arg(long)]
        ref_bot: Option<String>,
        /// Roster JSON file (defaults to roster_path from the config)
        #[arg(long)]
        roster: Option<String>,
        /// Replace the board's default order
        #[arg(long)]
        sort_by: Option<String>,
        /// Board length
        #[arg(long)]
        limit: Option<usize>,
        /// Popularity metric: subscribers or volume
        #[arg(long, default_value = "subscribers")]
        metric: String,
        /// Hide ineligible bots
        #[arg(long)]
        eligible_only: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Serve the leaderboard HTTP API
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Determine config path: CLI arg > ARENA_CONFIG env var > default
    let config_path = AppConfig::resolve_path(args.config.as_deref());
    let config = match &config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;

    arena_telemetry::init_logging(&config.telemetry.log_level)?;

    info!("Starting leaderboard arena v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!(config_path = %path, "Configuration loaded"),
        None => warn!("Config file not found, using defaults"),
    }

    let app = Application::new(config)?;

    match args.command {
        Command::Rank {
            view,
            ref_bot,
            roster,
            sort_by,
            limit,
            metric,
            eligible_only,
            format,
        } => {
            let view: ViewMode = view.parse()?;
            let options = RankOptions {
                result_limit: limit,
                pinned_reference: ref_bot,
                popularity_metric: metric.parse::<PopularityMetric>()?,
                sort_by: sort_by.as_deref().map(str::parse::<SortKey>).transpose()?,
                eligible_only,
                ..Default::default()
            };

            let roster = app.load_roster(roster.as_deref())?;
            let board = app.rank(&roster, view, &options);
            println!("{}", render(&board, format)?);
        }
        Command::Serve => app.serve().await?,
    }

    Ok(())
}
