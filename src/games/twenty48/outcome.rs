//! Values handed back to callers of the engine.

use super::types::{Coord, Direction, GameStatus, Grid};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What a single move did.
///
/// Carries the presentation hints (merged and spawned coordinates) so the
/// renderer never needs to diff grids itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Requested direction, `None` when the input named no direction.
    direction: Option<Direction>,
    /// Whether any cell changed.
    moved: bool,
    /// Score gained by merges in this move.
    gained: u32,
    /// Cells holding a freshly merged tile.
    merged: Vec<Coord>,
    /// Cell filled by the post-move spawn.
    spawned: Option<Coord>,
    /// Whether this move ended the game.
    game_over: bool,
}

impl MoveOutcome {
    /// Outcome of a move that changed nothing.
    pub fn unchanged(direction: Option<Direction>) -> Self {
        Self {
            direction,
            moved: false,
            gained: 0,
            merged: Vec::new(),
            spawned: None,
            game_over: false,
        }
    }

    pub(crate) fn committed(
        direction: Direction,
        gained: u32,
        merged: Vec<Coord>,
        spawned: Option<Coord>,
        game_over: bool,
    ) -> Self {
        Self {
            direction: Some(direction),
            moved: true,
            gained,
            merged,
            spawned,
            game_over,
        }
    }

    /// Whether at least one merge happened.
    pub fn any_merged(&self) -> bool {
        !self.merged.is_empty()
    }
}

/// Read-only view of the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Current grid.
    grid: Grid,
    /// Score of the current game.
    score: u32,
    /// Best score seen by this engine.
    best_score: u32,
    /// Playing or over.
    status: GameStatus,
}

impl BoardSnapshot {
    pub(crate) fn new(grid: Grid, score: u32, best_score: u32, status: GameStatus) -> Self {
        Self {
            grid,
            score,
            best_score,
            status,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}
