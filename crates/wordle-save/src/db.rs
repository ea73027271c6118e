//! Transactional key-value backend over LMDB (heed).
//!
//! One [`PlayerRecord`] per player, keyed by the decimal encoding of the
//! player identity inside the single `"users"` namespace. Records are
//! replaced wholesale on every save; the engine's write transactions make
//! a save for one variant atomic with respect to every other variant
//! already persisted for the same player.

use std::collections::BTreeMap;
use std::path::Path;

use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions, RoTxn};
use serde::{Deserialize, Serialize};

use crate::error::{SaveError, SaveResult};
use crate::identity::{ANONYMOUS_PLAYER, PlayerId};
use crate::savefile::SaveFile;
use crate::storage::Storage;
use crate::types::GameVariant;

/// The single root namespace all player records live under.
const ROOT_USERS_DB: &str = "users";

/// The unit of storage: one player's save files across all variants.
///
/// `player_id` always equals the decimal key the record is stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRecord {
    player_id: PlayerId,
    save_files: BTreeMap<GameVariant, SaveFile>,
}

impl PlayerRecord {
    fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            save_files: BTreeMap::new(),
        }
    }
}

/// Save-file storage backed by an embedded transactional key-value store.
///
/// Safe for concurrent use by many sessions: the engine serializes write
/// transactions against the store file and isolates readers from in-flight
/// writers, so callers need no locking of their own. Open once per process
/// and share the handle for the process lifetime.
pub struct SaveDb {
    env: Env,
    db: Database<Str, Bytes>,
}

impl SaveDb {
    /// Open or create the store at `path` and bootstrap the root namespace.
    ///
    /// Creating the `"users"` database is idempotent and doubles as a smoke
    /// test that the store file is writable; a failure here refuses
    /// construction. Opening never blocks indefinitely: a lock conflict
    /// with another process surfaces as a prompt error, not a hang.
    ///
    /// # Errors
    /// Returns an error if the environment cannot be opened or the root
    /// namespace cannot be created.
    #[allow(unsafe_code)]
    pub fn open(path: impl AsRef<Path>) -> SaveResult<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)?;

        // SAFETY: the env is opened once per process and shared by handle;
        // it is never reopened with different options.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(1)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, Some(ROOT_USERS_DB))?;
        wtxn.commit()?;

        tracing::info!("opened save database at {}", path.display());
        Ok(Self { env, db })
    }

    /// Read and decode the record for `player`, or `None` if the player has
    /// never been saved.
    fn read_record(&self, txn: &RoTxn<'_>, player: PlayerId) -> SaveResult<Option<PlayerRecord>> {
        let Some(raw) = self.db.get(txn, &player.to_string())? else {
            return Ok(None);
        };
        let record = serde_json::from_slice(raw).map_err(SaveError::CorruptRecord)?;
        Ok(Some(record))
    }
}

impl Storage for SaveDb {
    fn load(&self, variant: GameVariant, player: PlayerId) -> SaveResult<SaveFile> {
        let rtxn = self.env.read_txn()?;
        let record = self
            .read_record(&rtxn, player)?
            .ok_or(SaveError::NoSuchPlayer(player))?;
        let save = record
            .save_files
            .get(&variant)
            .cloned()
            .ok_or(SaveError::NoSuchSaveFile(variant))?;

        tracing::trace!("loaded {variant} save for player {player}");
        Ok(save)
    }

    fn save(&self, save: &SaveFile, variant: GameVariant, player: PlayerId) -> SaveResult<()> {
        if player == ANONYMOUS_PLAYER {
            return Err(SaveError::InvalidPlayerIdentity);
        }

        // Re-read inside the write transaction so the replace is atomic
        // with respect to the player's other variants.
        let mut wtxn = self.env.write_txn()?;
        let mut record = self
            .read_record(&wtxn, player)?
            .unwrap_or_else(|| PlayerRecord::empty(player));
        record.save_files.insert(variant, save.clone());

        let raw = serde_json::to_vec(&record).map_err(SaveError::CorruptRecord)?;
        self.db.put(&mut wtxn, &player.to_string(), &raw)?;
        wtxn.commit()?;

        tracing::debug!("saved {variant} for player {player}");
        Ok(())
    }
}
