//! Session lifecycle: load-or-create, daily bonus and save-on-mutation.

pub mod lifecycle;
pub mod save;

use chrono::{Local, Utc};
use rand::Rng;
use tracing::{error, info, warn};

use crate::core::config::GameConfig;
use crate::core::error::SlotError;
use crate::core::game_state::SessionState;
use crate::core::intent::{handle_intent, Directive, Intent, IntentOutcome};
use lifecycle::apply_daily_bonus;
use save::SaveManager;

/// A running game: the state, its configuration and where it is saved.
pub struct Session {
    state: SessionState,
    config: GameConfig,
    save_manager: Option<SaveManager>,
    last_save_error: Option<String>,
}

impl Session {
    /// Load the saved session (or start fresh) and run the daily bonus check.
    ///
    /// An unreadable or outdated snapshot is replaced by a new session.
    pub fn open(config: GameConfig) -> Self {
        let save_manager = config.save_path.clone().map(SaveManager::new);
        let now = Utc::now().timestamp();

        let state = match &save_manager {
            Some(manager) if manager.save_exists() => match manager.load() {
                Ok(mut state) => {
                    info!(path = %manager.path().display(), "session loaded");
                    state.apply_features(&config.features);
                    state
                }
                Err(err) => {
                    warn!(%err, "discarding saved session, starting fresh");
                    SessionState::new(&config, now)
                }
            },
            _ => SessionState::new(&config, now),
        };

        let mut session = Self::from_parts(state, config, save_manager);
        if apply_daily_bonus(&mut session.state, Local::now().date_naive(), now) {
            session.persist();
        }
        session
    }

    /// Wrap an existing state without touching the disk or the calendar.
    pub fn from_parts(
        state: SessionState,
        config: GameConfig,
        save_manager: Option<SaveManager>,
    ) -> Self {
        Self {
            state,
            config,
            save_manager,
            last_save_error: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Message from the most recent failed save, cleared by the next good one.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// A tick directive when the loaded session was saved mid-spin.
    pub fn resume_directive(&self) -> Option<Directive> {
        self.state.is_spinning().then(Directive::next_tick)
    }

    /// Handle one intent and save if it changed persistent state.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        intent: Intent,
        rng: &mut R,
    ) -> Result<IntentOutcome, SlotError> {
        match handle_intent(&mut self.state, intent, &self.config, rng) {
            Ok(outcome) => {
                if outcome.persist {
                    self.persist();
                }
                Ok(outcome)
            }
            Err(err) => {
                // A tick failure aborted a spin that already spent its token.
                // Gate failures leave the balances untouched.
                if intent == Intent::Tick {
                    self.persist();
                }
                Err(err)
            }
        }
    }

    /// Write the snapshot. Failures are logged and remembered, never fatal.
    pub fn persist(&mut self) {
        let Some(manager) = &self.save_manager else {
            return;
        };

        self.state.last_played = Utc::now().timestamp();
        match manager.save(&self.state) {
            Ok(()) => self.last_save_error = None,
            Err(err) => {
                error!(%err, path = %manager.path().display(), "failed to save session");
                self.last_save_error = Some(SlotError::Save(err).to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FeatureFlags;
    use crate::core::constants::{DAILY_TOKENS, STARTING_TOKENS};
    use crate::reels::{Symbol, WeightTable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;
    use std::path::PathBuf;

    fn temp_save_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "jackpot-session-test-{}-{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("save.json");
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn test_open_without_save_starts_fresh() {
        let session = Session::open(GameConfig::default());
        assert_eq!(session.state().tokens, STARTING_TOKENS);
        assert!(session.resume_directive().is_none());
    }

    #[test]
    fn test_spin_writes_snapshot() {
        let path = temp_save_path("spin");
        let mut session = Session::open(GameConfig::with_save_path(&path));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        session.handle(Intent::Spin, &mut rng).unwrap();
        assert!(path.exists());

        let reopened = Session::open(GameConfig::with_save_path(&path));
        assert!(reopened.state().is_spinning());
        assert_eq!(reopened.state().tokens, STARTING_TOKENS - 1);
        assert_eq!(reopened.resume_directive(), Some(Directive::next_tick()));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_outdated_snapshot_discarded() {
        let path = temp_save_path("outdated");
        let mut state = SessionState::new(&GameConfig::default(), Utc::now().timestamp());
        state.currency = 999;
        state.schema_version = "0.3".to_string();
        SaveManager::new(&path).save(&state).unwrap();

        let session = Session::open(GameConfig::with_save_path(&path));
        assert_eq!(session.state().currency, 0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_daily_bonus_on_open() {
        let path = temp_save_path("daily");
        let two_days_ago = Utc::now().timestamp() - 2 * 86_400;
        let state = SessionState::new(&GameConfig::default(), two_days_ago);
        SaveManager::new(&path).save(&state).unwrap();

        let session = Session::open(GameConfig::with_save_path(&path));
        assert_eq!(session.state().tokens, STARTING_TOKENS + DAILY_TOKENS);

        // Granted once: reopening the same day adds nothing
        let again = Session::open(GameConfig::with_save_path(&path));
        assert_eq!(again.state().tokens, STARTING_TOKENS + DAILY_TOKENS);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_reopen_applies_disabled_features() {
        let path = temp_save_path("features");
        let mut state = SessionState::new(&GameConfig::default(), Utc::now().timestamp());
        state.fever_active = true;
        state.free_spin_pending = true;
        state.is_daytime = false;
        state.weights.apply_nighttime_weights();
        SaveManager::new(&path).save(&state).unwrap();

        let mut config = GameConfig::with_save_path(&path);
        config.features = FeatureFlags {
            fever: false,
            free_spins: false,
            penalty: false,
        };
        let session = Session::open(config);

        let weights = &session.state().weights;
        assert_eq!(weights.get(Symbol::Fever), 0);
        assert_eq!(weights.get(Symbol::FreeSpin), 0);
        assert_eq!(weights.get(Symbol::Penalty), 0);
        assert!(!session.state().fever_active);
        assert!(!session.state().free_spin_pending);
        // Night weights otherwise survive the reload
        assert!(!session.state().is_daytime);
        assert!(weights.get(Symbol::DayTrigger) > 0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_gate_error_does_not_save() {
        let path = temp_save_path("gate-error");
        let mut state = SessionState::new(&GameConfig::default(), Utc::now().timestamp());
        state.weights = WeightTable::from_entries(&[]);
        let mut session = Session::from_parts(
            state,
            GameConfig::with_save_path(&path),
            Some(SaveManager::new(&path)),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(session.handle(Intent::Spin, &mut rng).is_err());
        assert!(!path.exists());
        assert_eq!(session.state().tokens, STARTING_TOKENS);
    }

    #[test]
    fn test_tick_error_saves_aborted_spin() {
        let path = temp_save_path("tick-error");
        let state = SessionState::new(&GameConfig::default(), Utc::now().timestamp());
        let mut session = Session::from_parts(
            state,
            GameConfig::with_save_path(&path),
            Some(SaveManager::new(&path)),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        session.handle(Intent::Spin, &mut rng).unwrap();
        fs::remove_file(&path).unwrap();
        session.state.weights = WeightTable::from_entries(&[]);

        assert!(session.handle(Intent::Tick, &mut rng).is_err());
        let saved = SaveManager::new(&path).load().unwrap();
        assert!(!saved.spin.is_active());
        assert_eq!(saved.tokens, STARTING_TOKENS - 1);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        // A directory where the save file should be makes the rename fail
        let path = temp_save_path("unwritable");
        fs::create_dir_all(&path).unwrap();

        let state = SessionState::new(&GameConfig::default(), Utc::now().timestamp());
        let mut session = Session::from_parts(
            state,
            GameConfig::with_save_path(&path),
            Some(SaveManager::new(&path)),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let outcome = session.handle(Intent::Spin, &mut rng).unwrap();
        assert!(outcome.persist);
        assert!(session.last_save_error().is_some());
        assert!(session.state().is_spinning());

        fs::remove_dir_all(&path).ok();
    }
}
