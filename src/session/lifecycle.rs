//! Spin gating, token purchases and the daily bonus.

use chrono::{Local, NaiveDate, TimeZone};
use rand::Rng;
use tracing::{info, warn};

use crate::core::config::GameConfig;
use crate::core::constants::{DAILY_TOKENS, TOKEN_PACK_COST, TOKEN_PACK_SIZE};
use crate::core::error::SlotError;
use crate::core::game_state::SessionState;

/// Why a spin request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    StillSpinning,
    NoTokens,
    NegativeTokens,
}

impl SpinRejection {
    pub fn message(self) -> &'static str {
        match self {
            SpinRejection::StillSpinning => "Chill, the spinner is still spinning!",
            SpinRejection::NoTokens => "You have no more tokens!",
            SpinRejection::NegativeTokens => "How the heck do you have negative tokens?",
        }
    }
}

/// Result of a spin request that did not hit an engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinStart {
    Started { free_spin: bool },
    Rejected(SpinRejection),
}

/// Check the gate and, if it passes, pay for and start a spin.
///
/// A rejection sets the notice message and changes nothing else.
pub fn try_start_spin<R: Rng + ?Sized>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<SpinStart, SlotError> {
    let rejection = if state.is_spinning() {
        Some(SpinRejection::StillSpinning)
    } else if state.tokens == 0 && !state.free_spin_pending {
        Some(SpinRejection::NoTokens)
    } else if state.tokens < 0 {
        Some(SpinRejection::NegativeTokens)
    } else {
        None
    };

    if let Some(rejection) = rejection {
        if rejection == SpinRejection::NegativeTokens {
            warn!(tokens = state.tokens, "negative token balance in session");
        }
        state.last_message = rejection.message().to_string();
        return Ok(SpinStart::Rejected(rejection));
    }

    if state.weights.total() == 0 {
        let err = SlotError::DegenerateDistribution;
        state.last_message = format!("The reels are jammed: {}", err);
        return Err(err);
    }

    let free_spin = state.free_spin_pending;
    if free_spin {
        state.free_spin_pending = false;
        state.last_message = "Enjoy the free spin!".to_string();
    } else {
        state.tokens -= 1;
        state.last_message = String::new();
    }

    state.spin.start(rng, config.guaranteed_win_percent);
    Ok(SpinStart::Started { free_spin })
}

/// Exchange currency for a pack of tokens. Returns whether the purchase went through.
pub fn purchase_tokens(state: &mut SessionState) -> bool {
    if state.currency < TOKEN_PACK_COST {
        state.last_message = "You don't have enough money to purchase those tokens!".to_string();
        return false;
    }

    state.currency -= TOKEN_PACK_COST;
    state.tokens += TOKEN_PACK_SIZE;
    state.last_message = format!(
        "You bought {} tokens for ${}!",
        TOKEN_PACK_SIZE, TOKEN_PACK_COST
    );
    true
}

/// Local calendar date of a unix timestamp.
pub fn local_date(timestamp: i64) -> Option<NaiveDate> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.date_naive())
}

/// Grant the daily tokens if `today` is later than the last played date.
///
/// `now` becomes the new `last_played` when the bonus is granted.
pub fn apply_daily_bonus(state: &mut SessionState, today: NaiveDate, now: i64) -> bool {
    let last = match local_date(state.last_played) {
        Some(date) => date,
        None => return false,
    };
    if today <= last {
        return false;
    }

    state.tokens += DAILY_TOKENS;
    state.last_played = now;
    state.last_message = format!(
        "It's a new day! Have {} tokens on the house :)",
        DAILY_TOKENS
    );
    info!(tokens = state.tokens, "daily bonus granted");
    true
}
