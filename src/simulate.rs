//! Headless play: apply a scripted list of moves to a seeded game.

use crate::games::twenty48::{BoardEngine, BoardSnapshot, TileSource};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Final engine state.
    snapshot: BoardSnapshot,
    /// Moves that changed the board.
    committed: usize,
    /// Moves that changed nothing, including unknown names.
    ignored: usize,
}

impl SimulationReport {
    /// Text rendering: board, score line and status.
    pub fn display(&self) -> String {
        format!(
            "{}\n\nScore: {}  Best: {}  Status: {}\nCommitted: {}  Ignored: {}",
            self.snapshot.grid(),
            self.snapshot.score(),
            self.snapshot.best_score(),
            self.snapshot.status(),
            self.committed,
            self.ignored
        )
    }
}

/// Splits a move list on commas and whitespace.
pub fn parse_moves(moves: &str) -> Vec<&str> {
    moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Applies each named move to `engine` in order.
///
/// Moves after the game ends are still applied; they are no-ops.
#[instrument(skip(engine, moves))]
pub fn run<S: TileSource>(engine: &mut BoardEngine<S>, moves: &str) -> SimulationReport {
    let mut committed = 0;
    let mut ignored = 0;

    for name in parse_moves(moves) {
        let outcome = engine.make_named_move(name);
        if *outcome.moved() {
            committed += 1;
        } else {
            debug!(name, "Move ignored");
            ignored += 1;
        }
    }

    let snapshot = engine.snapshot();
    info!(
        committed,
        ignored,
        score = snapshot.score(),
        "Simulation finished"
    );
    SimulationReport {
        snapshot,
        committed,
        ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::twenty48::{Grid, ScriptedTiles};

    #[test]
    fn test_parse_moves_accepts_mixed_separators() {
        assert_eq!(
            parse_moves("left, up  right,,down"),
            vec!["left", "up", "right", "down"]
        );
        assert!(parse_moves("  ").is_empty());
    }

    #[test]
    fn test_run_counts_committed_and_ignored() {
        let mut engine = BoardEngine::from_grid(
            Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]),
            ScriptedTiles::default(),
        );
        let report = run(&mut engine, "left,jump");
        assert_eq!(*report.committed(), 1);
        assert_eq!(*report.ignored(), 1);
        assert_eq!(*report.snapshot().score(), 4);
    }

    #[test]
    fn test_display_contains_score() {
        let mut engine = BoardEngine::seeded(3);
        let report = run(&mut engine, "");
        assert!(report.display().contains("Score: 0"));
    }
}
