//! Core domain types for 2048.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 4;

/// A cell coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Row index (0-3).
    pub row: usize,
    /// Column index (0-3).
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a move.
///
/// Parsing is case-insensitive and accepts the lowercase names
/// (`"left"`, `"right"`, `"up"`, `"down"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    /// Tiles slide toward column 0.
    Left,
    /// Tiles slide toward column 3.
    Right,
    /// Tiles slide toward row 0.
    Up,
    /// Tiles slide toward row 3.
    Down,
}

impl Direction {
    /// Parses a direction name, returning `None` for anything unrecognized.
    #[instrument]
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    /// The direction that slides tiles toward the opposite edge.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Whether the game still accepts moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// At least one move may still change the board.
    #[default]
    Playing,
    /// No move can change the board. Sticky until reset.
    Over,
}

/// 4x4 grid of tile values. `0` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order.
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from explicit rows.
    ///
    /// Play only ever produces powers of two up to 2^17. Larger values are
    /// accepted; merges past 2^31 saturate at `u32::MAX`.
    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the value at `coord`.
    pub fn get(&self, coord: Coord) -> u32 {
        self.cells[coord.row][coord.col]
    }

    /// Sets the value at `coord`.
    pub(crate) fn set(&mut self, coord: Coord, value: u32) {
        self.cells[coord.row][coord.col] = value;
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Self::coords().filter(|c| self.get(*c) == 0).collect()
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|v| **v != 0).count()
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|v| u64::from(*v)).sum()
    }

    /// Largest tile on the board, or 0 when empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Formats the grid as a human-readable block of text.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| match v {
                        0 => format!("{:>5}", "."),
                        v => format!("{v:>5}"),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parses_case_insensitively() {
        assert_eq!(Direction::from_name("left"), Some(Direction::Left));
        assert_eq!(Direction::from_name(" UP "), Some(Direction::Up));
        assert_eq!(Direction::from_name("Down"), Some(Direction::Down));
        assert_eq!(Direction::from_name("diagonal"), None);
        assert_eq!(Direction::from_name(""), None);
    }

    #[test]
    fn test_direction_display_is_lowercase() {
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        assert_eq!(
            grid.empty_cells(),
            vec![Coord::new(0, 1), Coord::new(3, 3)]
        );
        assert_eq!(grid.tile_count(), 14);
    }

    #[test]
    fn test_sum_and_max() {
        let grid = Grid::from_rows([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 128, 0], [0, 0, 0, 0]]);
        assert_eq!(grid.sum(), 134);
        assert_eq!(grid.max_tile(), 128);
        assert_eq!(Grid::new().max_tile(), 0);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let first = grid.display().lines().next().map(str::to_string);
        assert_eq!(first.as_deref(), Some("    2    .    .    ."));
    }
}
