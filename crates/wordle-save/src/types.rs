//! Core game types shared by the save-file model and its backends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of guesses a game allows.
pub const MAX_GUESSES: usize = 6;

/// Length of every guessable word.
pub const WORD_LENGTH: usize = 5;

/// Per-letter outcome of a guess.
///
/// Computed exactly once, at guess time, by the game loop; the storage
/// layer never recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterState {
    #[default]
    Unknown,
    ExactMatch,
    ContainedMatch,
    NoMatch,
}

impl LetterState {
    /// Terminal glyph for this state. `Unknown` renders as nothing.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ExactMatch => "🟩",
            Self::ContainedMatch => "🟨",
            // white square displays poorly in some terminal fonts
            Self::NoMatch => "🔳",
            Self::Unknown => "",
        }
    }
}

/// One filled cell of the guess grid: a letter and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub letter: char,
    pub state: LetterState,
}

/// The guess grid of the last game.
///
/// Rows fill front-to-back with no gaps: a present cell at row `r` implies
/// every row before `r` is fully present.
pub type GameGrid = [[Option<GridCell>; WORD_LENGTH]; MAX_GUESSES];

/// Status of the last game played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameState {
    /// End-of-game message for this state. `None` while still running.
    #[must_use]
    pub fn message(self, attempts: usize, word: &str) -> Option<String> {
        match self {
            Self::Won => Some(
                match attempts {
                    1 => "Genius! 😱",
                    2 => "Magnificent! 😲",
                    3 => "Impressive! 🤩",
                    4 => "Splendid! 👏",
                    5 => "Great! 😊",
                    6 => "Phew! 🎉",
                    _ => "You won! 🎉",
                }
                .to_owned(),
            ),
            Self::Lost => Some(format!("You lost! 😔 The word was: {word}.")),
            Self::Running => None,
        }
    }
}

/// One mode of the guessing game, identified externally by a short string
/// id. Serialized by that id inside record values; never used as a store
/// key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GameVariant {
    Official,
    Daily,
    Random,
}

impl GameVariant {
    /// The short external id (`"official"`, `"daily"`, `"random"`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Daily => "daily",
            Self::Random => "random",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Official => "Official word of the day",
            Self::Daily => "Wordle CLI word of the day",
            Self::Random => "Random wordle",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An external string did not name a known [`GameVariant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game variant id: {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for GameVariant {
    type Err = UnknownVariant;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "official" => Ok(Self::Official),
            "daily" => Ok(Self::Daily),
            "random" => Ok(Self::Random),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}
