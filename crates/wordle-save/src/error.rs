//! Storage error types.

use thiserror::Error;

use crate::identity::PlayerId;
use crate::types::GameVariant;

/// Error type shared by both storage backends.
///
/// Every variant is recoverable by the caller; none should abort the
/// process. Errors are final for the call that produced them: the storage
/// layer performs no retries and no fallback between backends.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The reserved zero identity was passed to `save`. Raised before any
    /// I/O happens.
    #[error("invalid player identity: the reserved id 0 cannot own a save")]
    InvalidPlayerIdentity,

    /// No record exists for this player (transactional backend only).
    #[error("no record for player {0}")]
    NoSuchPlayer(PlayerId),

    /// A record or directory was found, but nothing is saved for this
    /// variant.
    #[error("no save file for variant {0}")]
    NoSuchSaveFile(GameVariant),

    /// Stored bytes failed to decode (or a record failed to encode).
    /// On load this is data corruption, not absence.
    #[error("corrupt save record: {0}")]
    CorruptRecord(#[source] serde_json::Error),

    /// The embedded key-value engine failed to open, read, or write.
    #[error("database error: {0}")]
    Database(#[from] heed::Error),

    /// The filesystem failed underneath the local backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type SaveResult<T> = Result<T, SaveError>;
