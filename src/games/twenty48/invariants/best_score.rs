//! Best score invariant.

use super::super::BoardSnapshot;
use super::Invariant;

/// Invariant: the best score is never below the current score.
pub struct BestScoreInvariant;

impl Invariant<BoardSnapshot> for BestScoreInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        snapshot.best_score() >= snapshot.score()
    }

    fn description() -> &'static str {
        "Best score bounds the current score"
    }
}
