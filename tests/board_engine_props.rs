//! Property tests for move/merge conservation laws.

use proptest::prelude::*;
use strictly_2048::{BoardEngine, Direction, Grid, RandomTiles, SIZE, reduce_line, slide};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        1 => (1u32..=11).prop_map(|exp| 1 << exp),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    proptest::array::uniform4(proptest::array::uniform4(tile())).prop_map(Grid::from_rows)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

proptest! {
    #[test]
    fn move_adds_at_most_one_tile_and_conserves_sum(
        grid in grid(),
        direction in direction(),
        seed in any::<u64>(),
    ) {
        let mut engine = BoardEngine::from_grid(grid, RandomTiles::seeded(seed));
        let outcome = engine.make_move(direction);
        let after = *engine.grid();

        prop_assert!(after.tile_count() <= grid.tile_count() + 1);
        prop_assert_eq!(engine.score(), *outcome.gained());

        match outcome.spawned() {
            Some(coord) => {
                let spawned = u64::from(after.get(*coord));
                prop_assert!(spawned == 2 || spawned == 4);
                prop_assert_eq!(after.sum(), grid.sum() + spawned);
            }
            None => prop_assert_eq!(after.sum(), grid.sum()),
        }
    }

    #[test]
    fn noop_moves_leave_everything_alone(grid in grid(), direction in direction()) {
        let mut engine = BoardEngine::from_grid(grid, RandomTiles::seeded(0));
        if slide(&grid, direction).grid == grid {
            let before = engine.snapshot();
            let outcome = engine.make_move(direction);
            prop_assert!(!*outcome.moved());
            prop_assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn reduction_is_idempotent_without_merges(line in proptest::array::uniform4(tile())) {
        let once = reduce_line(line);
        let twice = reduce_line(once.cells);
        if twice.gained == 0 {
            prop_assert_eq!(twice.cells, once.cells);
        }
        prop_assert!(once.cells.iter().filter(|v| **v != 0).count() <= SIZE);
    }

    #[test]
    fn opposite_slides_mirror_each_other(grid in grid()) {
        // Sliding right equals mirroring, sliding left, and mirroring back.
        let mirror = |g: &Grid| {
            let mut rows = *g.rows();
            for row in rows.iter_mut() {
                row.reverse();
            }
            Grid::from_rows(rows)
        };
        let right = slide(&grid, Direction::Right);
        let left = slide(&mirror(&grid), Direction::Left);
        prop_assert_eq!(right.grid, mirror(&left.grid));
        prop_assert_eq!(right.gained, left.gained);
    }
}
