//! Sessions survive a restart through the JSON snapshot.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use jackpot::{GameConfig, Intent, Session, SPIN_TICKS, STARTING_TOKENS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn temp_save_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let dir = std::env::temp_dir().join(format!(
        "jackpot-it-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir.join("save.json")
}

#[test]
fn test_fresh_session_is_written_on_first_spin() {
    let path = temp_save_path();
    let mut session = Session::open(GameConfig::with_save_path(&path));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert_eq!(session.state().tokens, STARTING_TOKENS);
    session.handle(Intent::Spin, &mut rng).unwrap();
    assert!(path.exists());
    assert!(session.last_save_error().is_none());

    let reopened = Session::open(GameConfig::with_save_path(&path));
    assert_eq!(reopened.state().tokens, STARTING_TOKENS - 1);
    assert!(reopened.state().is_spinning());
    assert!(reopened.resume_directive().is_some());

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_settled_spin_round_trips() {
    let path = temp_save_path();
    let mut session = Session::open(GameConfig::with_save_path(&path));
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    session.handle(Intent::Spin, &mut rng).unwrap();
    for _ in 0..SPIN_TICKS {
        session.handle(Intent::Tick, &mut rng).unwrap();
    }
    assert!(!session.state().is_spinning());

    let reopened = Session::open(GameConfig::with_save_path(&path));
    let (before, after) = (session.state(), reopened.state());
    assert_eq!(after.tokens, before.tokens);
    assert_eq!(after.currency, before.currency);
    assert_eq!(after.jackpot_pool, before.jackpot_pool);
    assert_eq!(after.slot, before.slot);
    assert_eq!(after.weights, before.weights);
    assert!(reopened.resume_directive().is_none());

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_outdated_snapshot_starts_fresh() {
    let path = temp_save_path();
    fs::write(
        &path,
        r#"{"schema_version":"0","tokens":999,"currency":999}"#,
    )
    .unwrap();

    let session = Session::open(GameConfig::with_save_path(&path));
    assert_eq!(session.state().tokens, STARTING_TOKENS);
    assert_eq!(session.state().currency, 0);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_corrupt_snapshot_starts_fresh() {
    let path = temp_save_path();
    fs::write(&path, "not json at all").unwrap();

    let session = Session::open(GameConfig::with_save_path(&path));
    assert_eq!(session.state().tokens, STARTING_TOKENS);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_quit_persists_and_requests_shutdown() {
    let path = temp_save_path();
    let mut session = Session::open(GameConfig::with_save_path(&path));
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let outcome = session.handle(Intent::Quit, &mut rng).unwrap();
    assert!(outcome.quit);
    assert!(path.exists());

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}
