//! Local flat-file backend: one JSON save file per game variant in the
//! user's home directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{SaveError, SaveResult};
use crate::identity::{ANONYMOUS_PLAYER, PlayerId};
use crate::savefile::SaveFile;
use crate::storage::Storage;
use crate::types::GameVariant;

/// Single-player save-file storage on the local filesystem.
///
/// The player identity is accepted by the contract but ignored when
/// resolving paths, so two players sharing a machine overwrite each
/// other's save for the same variant. Concurrent saves of the same variant
/// race and the last writer wins; use one session at a time with this
/// backend. A write interrupted mid-flight can leave a truncated file.
pub struct LocalStorage {
    base_dir: PathBuf,
}

impl LocalStorage {
    /// Storage rooted at the user's home directory.
    ///
    /// # Errors
    /// Fails if no home directory can be determined for the current user.
    pub fn new() -> SaveResult<Self> {
        let base_dir = dirs::home_dir().ok_or_else(|| {
            SaveError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                "no home directory for the current user",
            ))
        })?;
        Ok(Self { base_dir })
    }

    /// Storage rooted at an explicit directory instead of the home
    /// directory. Tests use this.
    #[must_use]
    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn save_path(&self, variant: GameVariant) -> PathBuf {
        self.base_dir
            .join(format!(".wordle_{}.save.json", variant.id()))
    }
}

impl Storage for LocalStorage {
    fn load(&self, variant: GameVariant, _player: PlayerId) -> SaveResult<SaveFile> {
        let path = self.save_path(variant);
        let data = match fs::read(&path) {
            Ok(data) => data,
            // A missing file is the one "nothing saved yet" signal this
            // backend has; it cannot tell players apart.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SaveError::NoSuchSaveFile(variant));
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_slice(&data).map_err(SaveError::CorruptRecord)
    }

    fn save(&self, save: &SaveFile, variant: GameVariant, player: PlayerId) -> SaveResult<()> {
        if player == ANONYMOUS_PLAYER {
            return Err(SaveError::InvalidPlayerIdentity);
        }

        let path = self.save_path(variant);
        let data = serde_json::to_vec(save).map_err(SaveError::CorruptRecord)?;
        fs::write(&path, data)?;

        tracing::debug!("wrote save file {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameState;

    fn lost_in_six() -> SaveFile {
        let mut save = SaveFile::new();
        save.last_game_id = 120;
        save.last_game_status = GameState::Lost;
        save.statistics.games_played = 1;
        save
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_dir(dir.path());
        let save = lost_in_six();

        storage.save(&save, GameVariant::Official, 42).unwrap();
        assert_eq!(storage.load(GameVariant::Official, 42).unwrap(), save);
    }

    #[test]
    fn missing_file_is_no_such_save_for_every_identity() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_dir(dir.path());

        for player in [1, 42, u64::MAX] {
            let err = storage.load(GameVariant::Daily, player).unwrap_err();
            assert!(matches!(err, SaveError::NoSuchSaveFile(GameVariant::Daily)));
        }
    }

    #[test]
    fn identity_does_not_select_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_dir(dir.path());
        let save = lost_in_six();

        storage.save(&save, GameVariant::Random, 1).unwrap();
        // Documented limitation: a different player reads the same file.
        assert_eq!(storage.load(GameVariant::Random, 2).unwrap(), save);
    }

    #[test]
    fn zero_identity_is_rejected_without_creating_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_dir(dir.path());

        let err = storage
            .save(&SaveFile::new(), GameVariant::Daily, 0)
            .unwrap_err();
        assert!(matches!(err, SaveError::InvalidPlayerIdentity));
        assert!(!storage.save_path(GameVariant::Daily).exists());
    }

    #[test]
    fn undecodable_file_is_corruption_not_absence() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_dir(dir.path());

        fs::write(storage.save_path(GameVariant::Daily), b"{ truncated").unwrap();
        let err = storage.load(GameVariant::Daily, 42).unwrap_err();
        assert!(matches!(err, SaveError::CorruptRecord(_)));
    }
}
