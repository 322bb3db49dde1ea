//! Command line entry point for replaying a match ledger
//!
//! Reads a ledger file, replays it through the Elo ranking system and prints
//! the resulting leaderboard.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use elo_ledger::config::{AppConfig, ConfigOverrides};
use elo_ledger::import::LedgerFile;
use elo_ledger::LeaderboardEntry;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Elo Ledger - replay a history of matches into Elo ratings
#[derive(Parser)]
#[command(
    name = "elo-ledger",
    version,
    about = "Replay a ledger of pairwise match outcomes into Elo ratings",
    long_about = "Reads players and matches from a TOML or JSON ledger file, replays the matches \
                 in chronological order with the logistic Elo update, and prints every \
                 player's resulting rating."
)]
struct Args {
    /// Ledger file with players and matches
    #[arg(value_name = "LEDGER", help = "Path to a ledger file (TOML, or JSON by extension)")]
    ledger: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Starting rating override
    #[arg(long, value_name = "RATING", help = "Override the starting rating")]
    starting_rating: Option<f64>,

    /// K-factor override
    #[arg(short, long, value_name = "K", help = "Override the K-factor")]
    k_factor: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let overrides = ConfigOverrides {
        log_level: args.log_level.clone(),
        starting_rating: args.starting_rating,
        k_factor: args.k_factor,
    };
    AppConfig::load(args.config.as_deref(), &overrides)
}

fn print_text(rows: &[LeaderboardEntry<String>]) {
    let width = rows
        .iter()
        .map(|row| row.player_id.len())
        .max()
        .unwrap_or(0)
        .max("player".len());

    println!("{:>4}  {:<width$}  {:>9}  {:>7}", "rank", "player", "rating", "matches");
    for row in rows {
        println!(
            "{:>4}  {:<width$}  {:>9.1}  {:>7}",
            row.rank, row.player_id, row.rating, row.matches_played
        );
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    info!("Reading ledger from {}", args.ledger.display());
    debug!(
        "Starting rating {}, K-factor {}",
        config.ranking.starting_rating, config.ranking.k_factor
    );

    let mut system = LedgerFile::from_path(&args.ledger)?.into_system(config.ranking)?;
    let rows = system.leaderboard()?;

    match args.format {
        OutputFormat::Text => print_text(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.logging.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config) {
        error!("Replay failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
