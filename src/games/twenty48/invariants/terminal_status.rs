//! Terminal status invariant: an ended game really has no moves left.

use super::super::rules::has_available_move;
use super::super::BoardSnapshot;
use super::Invariant;

/// Invariant: `Over` implies no move can change the grid.
///
/// The converse does not hold: a stuck grid stays `Playing` until the next
/// committed move runs the terminal check.
pub struct TerminalStatusInvariant;

impl Invariant<BoardSnapshot> for TerminalStatusInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        !snapshot.is_over() || !has_available_move(snapshot.grid())
    }

    fn description() -> &'static str {
        "Finished games have no available move"
    }
}
