//! Intent dispatch: one player action or clock tick in, state changes out.
//!
//! This layer never touches the terminal or the disk. It reports through
//! [`IntentOutcome`] whether the caller should schedule another tick, save,
//! or shut down.

use std::time::Duration;

use rand::Rng;
use tracing::error;

use crate::core::config::GameConfig;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::error::SlotError;
use crate::core::game_state::SessionState;
use crate::economy::{settle_spin, SpinEvent};
use crate::reels::SpinProgress;
use crate::session::lifecycle::{purchase_tokens, try_start_spin, SpinStart};

/// Discrete inputs the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Spin,
    Quit,
    PurchaseTokens,
    /// Display only; no state effect.
    Resize { width: u16, height: u16 },
    Tick,
}

/// Requests from the engine back to the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    ScheduleTick(Duration),
}

impl Directive {
    pub fn next_tick() -> Self {
        Directive::ScheduleTick(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentOutcome {
    /// Only issued while a spin is running.
    pub directive: Option<Directive>,
    /// State changed in a way that must reach disk.
    pub persist: bool,
    pub quit: bool,
    /// Set on the tick that finished a spin.
    pub event: Option<SpinEvent>,
}

/// Apply one intent to the session.
pub fn handle_intent<R: Rng + ?Sized>(
    state: &mut SessionState,
    intent: Intent,
    config: &GameConfig,
    rng: &mut R,
) -> Result<IntentOutcome, SlotError> {
    match intent {
        Intent::Spin => match try_start_spin(state, config, rng)? {
            SpinStart::Started { .. } => Ok(IntentOutcome {
                directive: Some(Directive::next_tick()),
                persist: true,
                ..IntentOutcome::default()
            }),
            SpinStart::Rejected(_) => Ok(IntentOutcome::default()),
        },
        Intent::Tick => handle_tick(state, config, rng),
        Intent::PurchaseTokens => Ok(IntentOutcome {
            persist: purchase_tokens(state),
            ..IntentOutcome::default()
        }),
        Intent::Quit => Ok(IntentOutcome {
            persist: true,
            quit: true,
            ..IntentOutcome::default()
        }),
        Intent::Resize { .. } => Ok(IntentOutcome::default()),
    }
}

fn handle_tick<R: Rng + ?Sized>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<IntentOutcome, SlotError> {
    let progress = match state.spin.advance(&mut state.slot, &state.weights, rng) {
        Ok(progress) => progress,
        Err(err) => {
            error!(%err, "spin aborted");
            state.spin.abort();
            state.last_message = format!("The reels jammed: {}", err);
            return Err(err);
        }
    };

    match progress {
        SpinProgress::Idle => Ok(IntentOutcome::default()),
        SpinProgress::Spinning => Ok(IntentOutcome {
            directive: Some(Directive::next_tick()),
            ..IntentOutcome::default()
        }),
        SpinProgress::Finished => {
            let event = settle_spin(state, config, rng);
            Ok(IntentOutcome {
                persist: true,
                event: Some(event),
                ..IntentOutcome::default()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SPIN_TICKS;
    use crate::reels::{Symbol, WeightTable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_spin_schedules_tick_and_persists() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let mut rng = create_test_rng();

        let outcome = handle_intent(&mut state, Intent::Spin, &config, &mut rng).unwrap();
        assert_eq!(outcome.directive, Some(Directive::next_tick()));
        assert!(outcome.persist);
        assert!(!outcome.quit);
    }

    #[test]
    fn test_rejected_spin_has_no_directive() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        state.tokens = 0;
        let mut rng = create_test_rng();

        let outcome = handle_intent(&mut state, Intent::Spin, &config, &mut rng).unwrap();
        assert_eq!(outcome, IntentOutcome::default());
    }

    #[test]
    fn test_ticks_until_finished() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let mut rng = create_test_rng();
        handle_intent(&mut state, Intent::Spin, &config, &mut rng).unwrap();

        for tick in 1..=SPIN_TICKS {
            let outcome = handle_intent(&mut state, Intent::Tick, &config, &mut rng).unwrap();
            if tick < SPIN_TICKS {
                assert_eq!(outcome.directive, Some(Directive::next_tick()));
                assert!(!outcome.persist);
            } else {
                assert_eq!(outcome.directive, None);
                assert!(outcome.persist);
                assert!(outcome.event.is_some());
            }
        }
        assert!(!state.is_spinning());

        // Stray tick after the spin is ignored
        let outcome = handle_intent(&mut state, Intent::Tick, &config, &mut rng).unwrap();
        assert_eq!(outcome, IntentOutcome::default());
    }

    #[test]
    fn test_tick_error_aborts_spin() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let mut rng = create_test_rng();
        handle_intent(&mut state, Intent::Spin, &config, &mut rng).unwrap();

        state.weights = WeightTable::from_entries(&[(Symbol::Five, 0)]);
        let result = handle_intent(&mut state, Intent::Tick, &config, &mut rng);
        assert!(matches!(result, Err(SlotError::DegenerateDistribution)));
        assert!(!state.is_spinning());
        assert!(state.last_message.contains("jammed"));
    }

    #[test]
    fn test_quit_persists() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let mut rng = create_test_rng();
        let outcome = handle_intent(&mut state, Intent::Quit, &config, &mut rng).unwrap();
        assert!(outcome.quit);
        assert!(outcome.persist);
    }

    #[test]
    fn test_resize_changes_nothing() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let before = state.clone();
        let mut rng = create_test_rng();
        let outcome = handle_intent(
            &mut state,
            Intent::Resize {
                width: 80,
                height: 24,
            },
            &config,
            &mut rng,
        )
        .unwrap();
        assert_eq!(outcome, IntentOutcome::default());
        assert_eq!(state, before);
    }

    #[test]
    fn test_purchase_persists_only_on_success() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 0);
        let mut rng = create_test_rng();

        let outcome =
            handle_intent(&mut state, Intent::PurchaseTokens, &config, &mut rng).unwrap();
        assert!(!outcome.persist);

        state.currency = 100;
        let outcome =
            handle_intent(&mut state, Intent::PurchaseTokens, &config, &mut rng).unwrap();
        assert!(outcome.persist);
        assert_eq!(state.currency, 0);
    }
}
