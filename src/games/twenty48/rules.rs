//! Pure rule predicates over a grid.

use super::types::{Coord, Grid, SIZE};
use tracing::instrument;

/// Checks if every cell holds a tile.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.rows().iter().flatten().all(|v| *v != 0)
}

/// Checks if two horizontally or vertically adjacent tiles are equal.
#[instrument(skip(grid))]
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    Grid::coords().any(|c| {
        let value = grid.get(c);
        if value == 0 {
            return false;
        }
        let right = c.col + 1 < SIZE && grid.get(Coord::new(c.row, c.col + 1)) == value;
        let below = c.row + 1 < SIZE && grid.get(Coord::new(c.row + 1, c.col)) == value;
        right || below
    })
}

/// Checks if some move would change the board.
pub fn has_available_move(grid: &Grid) -> bool {
    !is_full(grid) || has_adjacent_pair(grid)
}

/// Returns `true` for a valid tile value: 0 or a power of two from 2 upward.
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
