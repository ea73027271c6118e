//! Behavior both backends must share when used through the `Storage` port.

use wordle_save::{
    GameState, GameVariant, GridCell, LetterState, LocalStorage, SaveDb, SaveError, SaveFile,
    Storage, derive_player_id,
};

fn finished_game() -> SaveFile {
    let mut save = SaveFile::new();
    save.last_game_id = 3;
    save.last_game_status = GameState::Won;
    for (column, letter) in "crane".chars().enumerate() {
        save.last_game_grid[0][column] = Some(GridCell {
            letter,
            state: LetterState::ExactMatch,
        });
    }
    save.statistics.games_played = 1;
    save.statistics.games_won = 1;
    save.statistics.guess_distribution.insert(4, 1);
    save
}

fn backends() -> Vec<(tempfile::TempDir, Box<dyn Storage + Send + Sync>)> {
    let db_dir = tempfile::tempdir().unwrap();
    let db: Box<dyn Storage + Send + Sync> = Box::new(SaveDb::open(db_dir.path()).unwrap());

    let local_dir = tempfile::tempdir().unwrap();
    let local: Box<dyn Storage + Send + Sync> =
        Box::new(LocalStorage::in_dir(local_dir.path()));

    vec![(db_dir, db), (local_dir, local)]
}

#[test]
fn round_trip_law_holds_for_both_backends() {
    let player = derive_player_id(b"ssh-ed25519 AAAA");
    for (_dir, storage) in backends() {
        let save = finished_game();
        storage.save(&save, GameVariant::Daily, player).unwrap();
        assert_eq!(storage.load(GameVariant::Daily, player).unwrap(), save);
    }
}

#[test]
fn zero_identity_never_saves_on_either_backend() {
    for (_dir, storage) in backends() {
        let err = storage
            .save(&finished_game(), GameVariant::Daily, 0)
            .unwrap_err();
        assert!(matches!(err, SaveError::InvalidPlayerIdentity));
    }
}

#[test]
fn serialized_save_migrates_between_backends() {
    let player = derive_player_id(b"keyA");
    let save = finished_game();

    let local_dir = tempfile::tempdir().unwrap();
    let local = LocalStorage::in_dir(local_dir.path());
    local.save(&save, GameVariant::Official, player).unwrap();
    let migrated = local.load(GameVariant::Official, player).unwrap();

    let db_dir = tempfile::tempdir().unwrap();
    let db = SaveDb::open(db_dir.path()).unwrap();
    db.save(&migrated, GameVariant::Official, player).unwrap();
    assert_eq!(db.load(GameVariant::Official, player).unwrap(), save);
}
