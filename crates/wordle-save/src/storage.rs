//! The storage port: the contract the game loop programs against.

use std::path::PathBuf;

use crate::db::SaveDb;
use crate::error::SaveResult;
use crate::identity::PlayerId;
use crate::local::LocalStorage;
use crate::savefile::SaveFile;
use crate::types::GameVariant;

/// Backend-agnostic persistence for per-player save files.
///
/// Constructed once at process start and shared by every session; backend
/// choice is a deployment decision, not a per-call one. Errors are final
/// for the call that produced them — implementations never retry and never
/// fabricate an empty save file in place of a "not found" error; treating
/// "not found" as "start fresh" is the caller's policy.
pub trait Storage {
    /// Load the persisted save file for `(player, variant)`.
    ///
    /// # Errors
    /// [`NoSuchPlayer`](crate::SaveError::NoSuchPlayer) or
    /// [`NoSuchSaveFile`](crate::SaveError::NoSuchSaveFile) when nothing is
    /// persisted yet, [`CorruptRecord`](crate::SaveError::CorruptRecord)
    /// when stored bytes fail to decode, or a storage-medium failure.
    fn load(&self, variant: GameVariant, player: PlayerId) -> SaveResult<SaveFile>;

    /// Persist `save` as the new authoritative state for
    /// `(player, variant)`. Atomic with respect to the player's other
    /// variants where the backend supports it.
    ///
    /// # Errors
    /// [`InvalidPlayerIdentity`](crate::SaveError::InvalidPlayerIdentity)
    /// for the reserved zero id (raised before any I/O), or a codec or
    /// storage-medium failure.
    fn save(&self, save: &SaveFile, variant: GameVariant, player: PlayerId) -> SaveResult<()>;
}

/// Which backend to construct. Decided once per process.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Embedded transactional store at the given path. Safe for many
    /// concurrent sessions.
    Database { path: PathBuf },
    /// One file per variant in the user's home directory. Single player,
    /// single session.
    LocalFile,
}

/// Construct the configured backend.
///
/// The returned handle is meant to be shared by every session for the
/// process lifetime, never rebuilt per call.
///
/// # Errors
/// Fails if the backend cannot bootstrap: unwritable store file, or no
/// resolvable home directory for the local backend.
pub fn open_storage(config: &BackendConfig) -> SaveResult<Box<dyn Storage + Send + Sync>> {
    match config {
        BackendConfig::Database { path } => Ok(Box::new(SaveDb::open(path)?)),
        BackendConfig::LocalFile => Ok(Box::new(LocalStorage::new()?)),
    }
}
