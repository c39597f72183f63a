//! Strictly 2048 library - a type-safe 2048 engine
//!
//! # Architecture
//!
//! - **Games**: the 2048 board engine, its rules and invariants
//! - **Audio**: sound events derived from move outcomes
//! - **Theme**: colour tables for the terminal board
//! - **Config**: TOML player preferences
//! - **TUI**: ratatui front-end
//!
//! # Example
//!
//! ```
//! use strictly_2048::{BoardEngine, Direction};
//!
//! let mut engine = BoardEngine::seeded(42);
//! let outcome = engine.make_move(Direction::Left);
//! assert!(engine.score() >= *outcome.gained());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod config;
mod games;
mod simulate;
mod theme;
mod tui;

// Crate-level exports - Game engine
pub use games::twenty48::{
    BoardEngine, BoardSnapshot, Coord, CoordMap, Direction, GameStatus, Grid, LineReduction,
    MoveOutcome, RandomTiles, SIZE, ScriptedTiles, Slide, SpawnValue, TilePick, TileSource,
    reduce_line, slide,
};

// Crate-level exports - Rules and invariants
pub use games::twenty48::{invariants, rules};

// Crate-level exports - Presentation
pub use audio::{Silent, SoundEvent, SoundSink, TerminalBell};
pub use theme::{CLASSIC, DARK, THEMES, Theme, ThemeError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Headless play
pub use simulate::{SimulationReport, parse_moves, run as simulate};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, action_for, run_tui};
