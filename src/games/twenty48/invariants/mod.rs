//! First-class invariants for 2048 boards.
//!
//! Invariants are logical properties of a [`super::BoardSnapshot`] that
//! must hold after every committed move. The engine checks them in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S>(
    checks: &[(fn(&S) -> bool, &'static str)],
    state: &S,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds, I1::description()),
                (I2::holds, I2::description()),
            ],
            state,
        )
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds, I1::description()),
                (I2::holds, I2::description()),
                (I3::holds, I3::description()),
            ],
            state,
        )
    }
}

pub mod best_score;
pub mod terminal_status;
pub mod tile_values;

pub use best_score::BestScoreInvariant;
pub use terminal_status::TerminalStatusInvariant;
pub use tile_values::TileValuesInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    TileValuesInvariant,
    TerminalStatusInvariant,
    BestScoreInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::twenty48::{BoardEngine, BoardSnapshot, GameStatus, Grid, ScriptedTiles};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let engine = BoardEngine::with_tiles(ScriptedTiles::default());
        assert!(BoardInvariants::check_all(&engine.snapshot()).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let grid = Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let snapshot = BoardSnapshot::new(grid, 10, 4, GameStatus::Over);

        let violations = BoardInvariants::check_all(&snapshot).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (TileValuesInvariant, BestScoreInvariant);
        let snapshot = BoardSnapshot::new(Grid::new(), 0, 0, GameStatus::Playing);
        assert!(TwoInvariants::check_all(&snapshot).is_ok());
    }
}
