//! Coordinate mappings that turn every direction into "slide toward offset 0".
//!
//! A line is a row or a column read starting from the edge tiles slide
//! toward. Mapping `(line, offset)` back to a grid coordinate lets one
//! reduction routine serve all four directions.

use super::types::{Coord, Direction, Grid, SIZE};

/// Maps `(line, offset)` to a grid coordinate.
pub type CoordMap = fn(usize, usize) -> Coord;

/// Rows read left to right.
fn left(line: usize, offset: usize) -> Coord {
    Coord::new(line, offset)
}

/// Rows read right to left.
fn right(line: usize, offset: usize) -> Coord {
    Coord::new(line, SIZE - 1 - offset)
}

/// Columns read top to bottom.
fn up(line: usize, offset: usize) -> Coord {
    Coord::new(offset, line)
}

/// Columns read bottom to top.
fn down(line: usize, offset: usize) -> Coord {
    Coord::new(SIZE - 1 - offset, line)
}

impl Direction {
    /// Returns the coordinate mapping for this direction.
    pub fn coord_map(self) -> CoordMap {
        match self {
            Direction::Left => left,
            Direction::Right => right,
            Direction::Up => up,
            Direction::Down => down,
        }
    }
}

/// Reads line `line` of `grid`, leading edge first.
pub fn read_line(grid: &Grid, map: CoordMap, line: usize) -> [u32; SIZE] {
    std::array::from_fn(|offset| grid.get(map(line, offset)))
}

/// Writes `values` into line `line` of `grid`, leading edge first.
pub fn write_line(grid: &mut Grid, map: CoordMap, line: usize, values: [u32; SIZE]) {
    for (offset, value) in values.into_iter().enumerate() {
        grid.set(map(line, offset), value);
    }
}
