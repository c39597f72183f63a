//! Strictly 2048 - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use strictly_2048::{BoardEngine, GameConfig, Theme, run_tui, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            theme,
            seed,
            mute,
        } => run_play(config, theme, seed, mute),
        Command::Simulate { moves, seed, json } => run_simulate(&moves, seed, json),
        Command::Themes => {
            for name in Theme::names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

/// Run the terminal game
fn run_play(
    config: std::path::PathBuf,
    theme: Option<String>,
    seed: Option<u64>,
    mute: bool,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config)?.with_overrides(theme, seed, mute);

    // Log to a file so output does not corrupt the alternate screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(&config)
}

/// Run moves headlessly and print the result
#[instrument(skip(moves))]
fn run_simulate(moves: &str, seed: u64, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting headless simulation");
    let mut engine = BoardEngine::seeded(seed);
    let report = simulate(&mut engine, moves);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", out);
    } else {
        println!("{}", report.display());
    }
    Ok(())
}
