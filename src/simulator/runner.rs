//! Simulation runner built on the real intent handler.
//!
//! Statistics are tracked externally from the [`SpinEvent`]s each finished
//! spin reports, so the simulated game cannot drift from the played one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::config::GameConfig;
use crate::core::error::SlotError;
use crate::core::game_state::SessionState;
use crate::core::intent::{handle_intent, Intent};
use crate::economy::SpinEvent;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SlotError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    simulate_with_rng(config, &mut rng)
}

/// Same as [`run_simulation`] with a caller-supplied generator.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> Result<SimReport, SlotError> {
    let game_config = config.game_config();
    let mut state = SessionState::new(&game_config, 0);
    let mut report = SimReport::new(config.num_spins, &state);
    let progress_every = progress_interval(config.num_spins, config.verbosity);

    for spin_idx in 0..config.num_spins {
        if config.auto_purchase && state.tokens <= 0 && !state.free_spin_pending {
            let outcome = handle_intent(&mut state, Intent::PurchaseTokens, &game_config, rng)?;
            if outcome.persist {
                report.token_packs_bought += 1;
            }
        }

        let free_spin = state.free_spin_pending;
        let started = handle_intent(&mut state, Intent::Spin, &game_config, rng)?;
        if started.directive.is_none() {
            report.went_broke = true;
            break;
        }
        if free_spin {
            report.free_spins_used += 1;
        }

        let (event, ticks) = match run_to_completion(&mut state, &game_config, rng)? {
            Some(done) => done,
            None => break,
        };
        report.record(&event, &state, ticks);

        if config.verbosity >= 2 {
            println!(
                "Spin {}/{} - {:?} tokens={} currency={} jackpot={}",
                spin_idx + 1,
                config.num_spins,
                event,
                state.tokens,
                state.currency,
                state.jackpot_pool
            );
        } else if progress_every.is_some_and(|every| (spin_idx + 1) % every == 0) {
            println!(
                "  {:>3}% - {} spins, ${} balance, ${} jackpot",
                (spin_idx + 1) * 100 / config.num_spins,
                spin_idx + 1,
                state.currency,
                state.jackpot_pool
            );
        }
    }

    report.finish(&state);
    Ok(report)
}

/// Spins between progress lines: ten lines per run at verbosity 1, none otherwise.
fn progress_interval(num_spins: u64, verbosity: u8) -> Option<u64> {
    if verbosity != 1 {
        return None;
    }
    Some((num_spins / 10).max(1))
}

/// Tick until the spin settles. Returns the event and how many ticks it took.
fn run_to_completion<R: Rng + ?Sized>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Option<(SpinEvent, u64)>, SlotError> {
    let mut ticks = 0;
    loop {
        let outcome = handle_intent(state, Intent::Tick, config, rng)?;
        ticks += 1;
        if let Some(event) = outcome.event {
            return Ok(Some((event, ticks)));
        }
        if outcome.directive.is_none() {
            return Ok(None);
        }
    }
}
