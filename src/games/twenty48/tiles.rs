//! Tile sources: where newly spawned tiles come from.
//!
//! The engine never touches a random number generator directly. It asks a
//! [`TileSource`] which empty cell to fill and with what value, so tests can
//! script the exact sequence of spawns.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// Value of a freshly spawned tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnValue {
    /// A 2 tile (90% of spawns).
    Two,
    /// A 4 tile (10% of spawns).
    Four,
}

impl SpawnValue {
    /// Numeric tile value.
    pub fn value(self) -> u32 {
        match self {
            SpawnValue::Two => 2,
            SpawnValue::Four => 4,
        }
    }
}

/// A choice made by a tile source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct TilePick {
    /// Index into the list of empty cells (row-major order).
    pub index: usize,
    /// Value to place.
    pub value: SpawnValue,
}

/// Provider of spawn decisions.
pub trait TileSource {
    /// Chooses one of `empty` empty cells and a value for it.
    ///
    /// Only called with `empty > 0`. The returned index must be below `empty`;
    /// the engine reduces it modulo `empty` regardless.
    fn pick(&mut self, empty: usize) -> TilePick;
}

/// Uniform cell choice, 2 with probability 0.9 and 4 otherwise.
#[derive(Debug, Clone)]
pub struct RandomTiles<R = StdRng> {
    rng: R,
}

impl RandomTiles<StdRng> {
    /// Seeds from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for a given seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomTiles<R> {
    /// Wraps an arbitrary RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandomTiles<R> {
    fn pick(&mut self, empty: usize) -> TilePick {
        let index = self.rng.gen_range(0..empty);
        let value = if self.rng.gen_range(0..10) < 9 {
            SpawnValue::Two
        } else {
            SpawnValue::Four
        };
        TilePick::new(index, value)
    }
}

/// Replays a fixed list of picks; falls back to the first empty cell and a 2
/// once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    picks: VecDeque<TilePick>,
}

impl ScriptedTiles {
    /// Creates a source that replays `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = TilePick>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl TileSource for ScriptedTiles {
    fn pick(&mut self, _empty: usize) -> TilePick {
        self.picks
            .pop_front()
            .unwrap_or(TilePick::new(0, SpawnValue::Two))
    }
}
