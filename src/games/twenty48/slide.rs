//! Line reduction and whole-grid slides.

use super::orientation::{read_line, write_line};
use super::types::{Coord, Direction, Grid, SIZE};
use tracing::instrument;

/// Result of reducing one line toward its leading edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReduction {
    /// Values after compaction and merging, padded with zeros.
    pub cells: [u32; SIZE],
    /// Sum of every merge result in this line.
    pub gained: u32,
    /// `true` at each offset holding a freshly merged tile.
    pub merged: [bool; SIZE],
}

/// Compacts a line toward offset 0 and merges equal neighbours.
///
/// Merging is a single left-to-right pass: a tile produced by a merge is
/// never merged again in the same reduction, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`. Merge results and the gain saturate at `u32::MAX`.
pub fn reduce_line(line: [u32; SIZE]) -> LineReduction {
    let mut cells = [0; SIZE];
    let mut merged = [false; SIZE];
    let mut gained = 0;

    let mut tiles = line.into_iter().filter(|v| *v != 0).peekable();
    let mut out = 0;
    while let Some(value) = tiles.next() {
        if tiles.peek() == Some(&value) {
            tiles.next();
            let doubled = value.saturating_mul(2);
            cells[out] = doubled;
            merged[out] = true;
            gained = doubled.saturating_add(gained);
        } else {
            cells[out] = value;
        }
        out += 1;
    }

    LineReduction {
        cells,
        gained,
        merged,
    }
}

/// Result of sliding a whole grid in one direction. No tile is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Grid after the slide.
    pub grid: Grid,
    /// Score gained by merges.
    pub gained: u32,
    /// Coordinates of merged tiles, in line order.
    pub merged: Vec<Coord>,
}

/// Slides every line of `grid` toward the edge named by `direction`.
#[instrument(skip(grid))]
pub fn slide(grid: &Grid, direction: Direction) -> Slide {
    let map = direction.coord_map();
    let mut next = *grid;
    let mut gained = 0;
    let mut merged = Vec::new();

    for line in 0..SIZE {
        let reduction = reduce_line(read_line(grid, map, line));
        write_line(&mut next, map, line, reduction.cells);
        gained = reduction.gained.saturating_add(gained);
        merged.extend(
            reduction
                .merged
                .iter()
                .enumerate()
                .filter(|(_, m)| **m)
                .map(|(offset, _)| map(line, offset)),
        );
    }

    Slide {
        grid: next,
        gained,
        merged,
    }
}
