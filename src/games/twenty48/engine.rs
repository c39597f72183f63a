//! Board-state engine for 2048.
//!
//! [`BoardEngine`] owns the grid, score, best score and game status. Callers
//! read through accessors and change state only through [`BoardEngine::reset`],
//! [`BoardEngine::spawn_tile`], [`BoardEngine::make_move`] and
//! [`BoardEngine::is_game_over`].

#[cfg(debug_assertions)]
use super::invariants::{BoardInvariants, InvariantSet};
use super::outcome::{BoardSnapshot, MoveOutcome};
use super::rules::has_available_move;
use super::slide::slide;
use super::tiles::{RandomTiles, TileSource};
use super::types::{Coord, Direction, GameStatus, Grid};
use tracing::{debug, info, instrument};

/// The 2048 game engine.
///
/// Generic over the [`TileSource`] so tests can inject a deterministic
/// sequence of spawns.
#[derive(Debug, Clone)]
pub struct BoardEngine<S = RandomTiles> {
    grid: Grid,
    score: u32,
    best_score: u32,
    status: GameStatus,
    tiles: S,
}

impl BoardEngine<RandomTiles> {
    /// Creates a new game using an entropy-seeded tile source.
    #[instrument]
    pub fn new() -> Self {
        Self::with_tiles(RandomTiles::from_entropy())
    }

    /// Creates a new game whose spawns are determined by `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_tiles(RandomTiles::seeded(seed))
    }
}

impl Default for BoardEngine<RandomTiles> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TileSource> BoardEngine<S> {
    /// Creates a new game drawing tiles from `tiles`. The board starts reset.
    #[instrument(skip(tiles))]
    pub fn with_tiles(tiles: S) -> Self {
        let mut engine = Self::from_grid(Grid::new(), tiles);
        engine.reset();
        engine
    }

    /// Starts from an existing grid without spawning anything.
    ///
    /// Score starts at 0 and the status at `Playing`, even for a stuck grid;
    /// the terminal check runs after the next committed move. Tile values
    /// follow [`Grid::from_rows`].
    #[instrument(skip(grid, tiles))]
    pub fn from_grid(grid: Grid, tiles: S) -> Self {
        Self {
            grid,
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            tiles,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the score of the current game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the best score seen by this engine.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended. Unlike [`Self::is_game_over`] this never
    /// changes state.
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Returns a copy of the observable state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.grid, self.score, self.best_score, self.status)
    }

    /// Clears the board, spawns two tiles and starts a new game.
    ///
    /// The best score carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.spawn_tile();
        self.spawn_tile();
        self.score = 0;
        self.status = GameStatus::Playing;
        info!(best_score = self.best_score, "New game");
    }

    /// Fills one random empty cell with a 2 (90%) or a 4 (10%).
    ///
    /// Returns the filled cell, or `None` when the board is full.
    #[instrument(skip(self))]
    pub fn spawn_tile(&mut self) -> Option<Coord> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            debug!("No empty cell to spawn into");
            return None;
        }

        let pick = self.tiles.pick(empty.len());
        let coord = empty[pick.index % empty.len()];
        let value = pick.value.value();
        self.grid.set(coord, value);
        debug!(%coord, value, "Spawned tile");
        Some(coord)
    }

    /// Slides every tile toward `direction`, merging equal neighbours.
    ///
    /// A move that changes nothing is a no-op: no spawn, no score change and
    /// no terminal check. Otherwise the new grid is committed, the merge gain
    /// is added to the score, one tile is spawned and the terminal check runs.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = slide(&self.grid, direction);
        if result.grid == self.grid {
            debug!("Move changed nothing");
            return MoveOutcome::unchanged(Some(direction));
        }

        self.grid = result.grid;
        self.score = self.score.saturating_add(result.gained);
        self.best_score = self.best_score.max(self.score);

        let spawned = self.spawn_tile();
        let game_over = self.is_game_over();

        #[cfg(debug_assertions)]
        {
            let checked = BoardInvariants::check_all(&self.snapshot());
            debug_assert!(checked.is_ok(), "Board invariants violated: {checked:?}");
        }

        debug!(
            gained = result.gained,
            merges = result.merged.len(),
            score = self.score,
            "Move committed"
        );
        MoveOutcome::committed(direction, result.gained, result.merged, spawned, game_over)
    }

    /// Like [`Self::make_move`] but takes a direction name.
    ///
    /// Unrecognized names leave the game untouched.
    #[instrument(skip(self))]
    pub fn make_named_move(&mut self, name: &str) -> MoveOutcome {
        match Direction::from_name(name) {
            Some(direction) => self.make_move(direction),
            None => {
                debug!(name, "Ignoring unknown direction");
                MoveOutcome::unchanged(None)
            }
        }
    }

    /// Checks for a full board with no equal neighbours.
    ///
    /// When it finds one, the status becomes `Over`; this is a state
    /// transition as well as a query.
    #[instrument(skip(self))]
    pub fn is_game_over(&mut self) -> bool {
        if has_available_move(&self.grid) {
            return false;
        }
        if self.status != GameStatus::Over {
            info!(score = self.score, max_tile = self.grid.max_tile(), "Game over");
        }
        self.status = GameStatus::Over;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::twenty48::{ScriptedTiles, SpawnValue, TilePick};

    fn engine_with(rows: [[u32; 4]; 4]) -> BoardEngine<ScriptedTiles> {
        BoardEngine::from_grid(Grid::from_rows(rows), ScriptedTiles::default())
    }

    #[test]
    fn test_reset_spawns_two_tiles() {
        let tiles = ScriptedTiles::new([
            TilePick::new(5, SpawnValue::Two),
            TilePick::new(0, SpawnValue::Four),
        ]);
        let engine = BoardEngine::with_tiles(tiles);
        assert_eq!(engine.tiles.remaining(), 0);
        assert_eq!(engine.grid().get(Coord::new(1, 1)), 2);
        assert_eq!(engine.grid().get(Coord::new(0, 0)), 4);
        assert_eq!(engine.grid().tile_count(), 2);
        assert_eq!(engine.score(), 0);
        assert!(!engine.game_over());
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut engine = engine_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = *engine.grid();
        assert_eq!(engine.spawn_tile(), None);
        assert_eq!(*engine.grid(), before);
    }

    #[test]
    fn test_spawn_index_counts_empty_cells() {
        let mut engine = BoardEngine::from_grid(
            Grid::from_rows([[2, 0, 2, 0], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 2]]),
            ScriptedTiles::new([TilePick::new(1, SpawnValue::Four)]),
        );
        assert_eq!(engine.spawn_tile(), Some(Coord::new(0, 3)));
        assert_eq!(engine.grid().get(Coord::new(0, 3)), 4);
    }

    #[test]
    fn test_move_left_merges_and_scores() {
        let mut engine = engine_with([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = engine.make_move(Direction::Left);

        assert!(*outcome.moved());
        assert_eq!(*outcome.gained(), 4);
        assert_eq!(outcome.merged(), &vec![Coord::new(0, 0)]);
        assert_eq!(engine.grid().rows()[0][0], 4);
        assert_eq!(engine.score(), 4);
        assert_eq!(engine.best_score(), 4);
        // scripted fallback fills the first empty cell
        assert_eq!(*outcome.spawned(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_noop_move_changes_nothing() {
        let mut engine = engine_with([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = engine.snapshot();
        let outcome = engine.make_move(Direction::Left);

        assert!(!*outcome.moved());
        assert_eq!(*outcome.spawned(), None);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_noop_move_on_stuck_grid_skips_terminal_check() {
        let mut engine = engine_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = engine.snapshot();
        let outcome = engine.make_move(Direction::Left);

        assert!(!*outcome.moved());
        assert!(!*outcome.game_over());
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_unknown_direction_is_noop() {
        let mut engine = engine_with([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let before = engine.snapshot();
        let outcome = engine.make_named_move("sideways");

        assert_eq!(*outcome.direction(), None);
        assert!(!*outcome.moved());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_named_move_applies_direction() {
        let mut engine = engine_with([[2, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = engine.make_named_move("RIGHT");
        assert_eq!(*outcome.direction(), Some(Direction::Right));
        assert_eq!(engine.grid().rows()[0][3], 4);
    }

    #[test]
    fn test_move_into_stuck_grid_ends_game() {
        // Sliding right leaves one hole at (0, 0); the spawned 2 seals it.
        let mut engine = engine_with([[4, 2, 4, 0], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let outcome = engine.make_move(Direction::Right);

        assert!(*outcome.game_over());
        assert_eq!(engine.status(), GameStatus::Over);
        assert_eq!(
            *engine.grid(),
            Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        );
    }

    #[test]
    fn test_full_grid_with_merge_is_not_over() {
        let mut engine = engine_with([
            [2, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        assert!(!engine.is_game_over());
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_reset_keeps_best_score() {
        let mut engine = engine_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        engine.make_move(Direction::Left);
        engine.reset();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.best_score(), 4);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.grid().tile_count(), 2);
    }
}
