//! Save-state storage for a terminal word-guessing game.
//!
//! One process may serve many remote terminal sessions at once; each
//! session loads its player's progress at session start and persists it
//! when a game completes. Two interchangeable backends implement the
//! [`Storage`] port:
//!
//! - [`SaveDb`] — an embedded transactional key-value store holding one
//!   record per player (all variants aggregated), keyed by an identity
//!   derived from the session credential. Safe for concurrent sessions.
//! - [`LocalStorage`] — one flat JSON file per game variant in the user's
//!   home directory. Single player, single session.
//!
//! Both backends persist the same human-readable encoding, so a record
//! migrates between them by plain re-serialization.
//!
//! # Usage
//!
//! ```ignore
//! use wordle_save::{BackendConfig, GameVariant, SaveFile, open_storage};
//!
//! let storage = open_storage(&BackendConfig::Database { path: "data/saves".into() })?;
//! let player = wordle_save::derive_player_id(public_key_bytes);
//!
//! let save = match storage.load(GameVariant::Daily, player) {
//!     Ok(save) => save,
//!     // Starting fresh on "nothing saved yet" is the caller's policy.
//!     Err(wordle_save::SaveError::NoSuchPlayer(_) | wordle_save::SaveError::NoSuchSaveFile(_)) => {
//!         SaveFile::new()
//!     }
//!     Err(err) => return Err(err.into()),
//! };
//! ```

mod db;
mod error;
mod identity;
mod local;
mod savefile;
mod storage;
mod types;

pub use db::SaveDb;
pub use error::{SaveError, SaveResult};
pub use identity::{ANONYMOUS_PLAYER, PlayerId, derive_player_id};
pub use local::LocalStorage;
pub use savefile::{SaveFile, Statistics};
pub use storage::{BackendConfig, Storage, open_storage};
pub use types::{
    GameGrid, GameState, GameVariant, GridCell, LetterState, MAX_GUESSES, UnknownVariant,
    WORD_LENGTH,
};
