//! Payouts and mode changes applied when a spin finishes.

use rand::Rng;
use tracing::{debug, info};

use super::types::SpinEvent;
use crate::core::config::GameConfig;
use crate::core::constants::{
    FEVER_PAYOUT_FACTOR, FIXED_BONUS_PAYOUT, LOSE_JACKPOT_INCREASE, MULTIPLIER_MAX,
    MULTIPLIER_MIN,
};
use crate::core::game_state::SessionState;
use crate::reels::{evaluate, MatchOutcome, Symbol};

/// Evaluate the current slot and apply the consequences.
pub fn settle_spin<R: Rng + ?Sized>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
) -> SpinEvent {
    let outcome = evaluate(&state.slot);
    resolve_spin(state, outcome, config, rng)
}

/// Apply a match outcome to the session and record the result message.
pub fn resolve_spin<R: Rng + ?Sized>(
    state: &mut SessionState,
    outcome: MatchOutcome,
    config: &GameConfig,
    rng: &mut R,
) -> SpinEvent {
    let event = match outcome {
        MatchOutcome::AllWild => SpinEvent::AllWild,
        MatchOutcome::Match(symbol) => apply_win(state, symbol, config, rng),
        MatchOutcome::NoMatch => apply_loss(state),
    };

    debug!(?outcome, ?event, "spin resolved");
    state.last_message = event.message();
    event
}

fn apply_win<R: Rng + ?Sized>(
    state: &mut SessionState,
    symbol: Symbol,
    config: &GameConfig,
    rng: &mut R,
) -> SpinEvent {
    match symbol {
        Symbol::Jackpot => {
            let amount = state.jackpot_pool;
            state.currency += amount;
            state.jackpot_pool = 0;
            info!(amount, "jackpot paid out");
            SpinEvent::JackpotWon { amount }
        }
        Symbol::FixedBonus => {
            state.currency += FIXED_BONUS_PAYOUT;
            SpinEvent::BonusWon {
                amount: FIXED_BONUS_PAYOUT,
            }
        }
        Symbol::MultiplierDie => {
            let multiplier = rng.gen_range(MULTIPLIER_MIN..=MULTIPLIER_MAX);
            state.multiplier = multiplier;
            SpinEvent::MultiplierRolled { multiplier }
        }
        Symbol::FreeSpin => {
            state.free_spin_pending = true;
            SpinEvent::FreeSpinGranted
        }
        Symbol::DayTrigger => {
            turn_to_day(state, config);
            SpinEvent::TurnedDay
        }
        Symbol::NightTrigger => {
            turn_to_night(state, config);
            SpinEvent::TurnedNight
        }
        Symbol::Fever => {
            state.fever_active = true;
            SpinEvent::FeverStarted
        }
        Symbol::Penalty => {
            let amount = if state.currency > 0 {
                rng.gen_range(1..=state.currency)
            } else {
                0
            };
            state.currency -= amount;
            SpinEvent::PenaltyTaken { amount }
        }
        Symbol::Wild | Symbol::Idle => apply_loss(state),
        face => match face.face_value() {
            Some(value) => pay_numeric(state, face, value),
            None => apply_loss(state),
        },
    }
}

fn pay_numeric(state: &mut SessionState, face: Symbol, value: u32) -> SpinEvent {
    let fever_doubled = state.fever_active;
    let fever_factor = if fever_doubled { FEVER_PAYOUT_FACTOR } else { 1 };
    let payout = value as i64 * state.multiplier as i64 * fever_factor;

    state.currency += payout;
    state.fever_active = false;

    SpinEvent::NumericWin {
        face,
        payout,
        fever_doubled,
    }
}

fn apply_loss(state: &mut SessionState) -> SpinEvent {
    state.jackpot_pool += LOSE_JACKPOT_INCREASE;
    SpinEvent::Loss {
        jackpot_pool: state.jackpot_pool,
    }
}

/// Switch to daytime weights. Safe to repeat.
pub fn turn_to_day(state: &mut SessionState, config: &GameConfig) {
    state.is_daytime = true;
    state.weights.apply_daytime_weights();
    config.features.mask(&mut state.weights);
}

/// Switch to nighttime weights. Safe to repeat.
pub fn turn_to_night(state: &mut SessionState, config: &GameConfig) {
    state.is_daytime = false;
    state.weights.apply_nighttime_weights();
    config.features.mask(&mut state.weights);
}
