//! 2048: slide tiles, merge equal neighbours, reach the biggest tile.

mod engine;
pub mod invariants;
mod orientation;
mod outcome;
pub mod rules;
mod slide;
mod tiles;
mod types;

pub use engine::BoardEngine;
pub use orientation::CoordMap;
pub use outcome::{BoardSnapshot, MoveOutcome};
pub use slide::{LineReduction, Slide, reduce_line, slide};
pub use tiles::{RandomTiles, ScriptedTiles, SpawnValue, TilePick, TileSource};
pub use types::{Coord, Direction, GameStatus, Grid, SIZE};
