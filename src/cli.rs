//! Command-line interface for strictly_2048.

use clap::{Parser, Subcommand};

/// Strictly 2048 - slide, merge, repeat
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the game config
        #[arg(short, long, default_value = "strictly_2048.toml")]
        config: std::path::PathBuf,

        /// Colour theme (overrides config)
        #[arg(long)]
        theme: Option<String>,

        /// Seed for tile spawning (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable the terminal bell
        #[arg(long)]
        mute: bool,
    },

    /// Apply a list of moves without a UI and print the result
    Simulate {
        /// Direction names separated by commas or spaces; unknown names are skipped
        #[arg(short, long)]
        moves: String,

        /// Seed for tile spawning
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print a JSON snapshot instead of a text board
        #[arg(long)]
        json: bool,
    },

    /// List available colour themes
    Themes,
}
