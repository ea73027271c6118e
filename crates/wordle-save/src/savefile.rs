//! The save-file model: one player's progress for one game variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{GameGrid, GameState, MAX_GUESSES};

/// Aggregate counters across all of a player's games for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// Wins keyed by the guess count (1..=[`MAX_GUESSES`]) they were won at.
    pub guess_distribution: BTreeMap<u8, u32>,
}

impl Statistics {
    fn zeroed() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            guess_distribution: (1..=MAX_GUESSES as u8).map(|n| (n, 0)).collect(),
        }
    }
}

/// One player's persisted progress for one game variant.
///
/// Created empty on first load, mutated in place by the game loop, handed
/// back to storage when a game completes. The storage port is the sole
/// writer of the persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Id of the last game played; `-1` until a first game is recorded.
    pub last_game_id: i64,
    pub last_game_status: GameState,
    pub last_game_grid: GameGrid,
    pub statistics: Statistics,
}

impl SaveFile {
    /// A fresh save: no game played yet, all-absent grid, zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_game_id: -1,
            last_game_status: GameState::Running,
            last_game_grid: GameGrid::default(),
            statistics: Statistics::zeroed(),
        }
    }
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::new()
    }
}
