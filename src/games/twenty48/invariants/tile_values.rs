//! Tile value invariant: every cell is empty or a power of two.

use super::super::rules::is_tile_value;
use super::super::BoardSnapshot;
use super::Invariant;

/// Invariant: every cell holds 0 or a power of two no smaller than 2.
pub struct TileValuesInvariant;

impl Invariant<BoardSnapshot> for TileValuesInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        snapshot
            .grid()
            .rows()
            .iter()
            .flatten()
            .all(|v| is_tile_value(*v))
    }

    fn description() -> &'static str {
        "Cells hold 0 or a power of two"
    }
}
