//! Tick-driven reel countdown.
//!
//! A spin lasts exactly [`SPIN_TICKS`] ticks. Reel 0 is redrawn during the
//! first third, reel 1 during the first two thirds and reel 2 on every tick,
//! so the reels come to rest left to right.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::matching::Slot;
use super::weights::WeightTable;
use crate::core::constants::SPIN_TICKS;
use crate::core::error::SlotError;

/// What a single call to [`SpinState::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinProgress {
    /// No spin was running; nothing changed.
    Idle,
    /// Reels moved and more ticks remain.
    Spinning,
    /// The last tick ran. The slot is final and must be evaluated.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinState {
    pub ticks_remaining: u32,
    pub active: bool,
    /// Chosen at spin start. A resumed spin from disk resolves naturally.
    #[serde(skip)]
    pub guaranteed_win: bool,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a spin, rolling whether it is destined to win.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R, guaranteed_win_percent: u32) {
        let guaranteed = rng.gen_range(0..100) < guaranteed_win_percent;
        self.start_with(guaranteed);
    }

    /// Begin a spin with an explicit guaranteed-win decision.
    pub fn start_with(&mut self, guaranteed_win: bool) {
        self.ticks_remaining = SPIN_TICKS;
        self.active = true;
        self.guaranteed_win = guaranteed_win;
    }

    /// Stop the spin without resolving it.
    pub fn abort(&mut self) {
        self.ticks_remaining = 0;
        self.active = false;
        self.guaranteed_win = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one animation tick against `slot`.
    ///
    /// On error the countdown is left untouched; the caller decides whether to
    /// abort the spin.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        slot: &mut Slot,
        table: &WeightTable,
        rng: &mut R,
    ) -> Result<SpinProgress, SlotError> {
        if !self.active {
            return Ok(SpinProgress::Idle);
        }

        let n = self.ticks_remaining;
        let reel0_until = SPIN_TICKS * 2 / 3;
        let reel1_until = SPIN_TICKS / 3;

        if n > reel0_until {
            slot[0] = table.draw(rng)?;
        }
        if n > reel1_until {
            slot[1] = if self.guaranteed_win && n == reel1_until + 1 {
                slot[0]
            } else {
                table.draw(rng)?
            };
        }
        slot[2] = if self.guaranteed_win && n == 1 {
            slot[0]
        } else {
            table.draw(rng)?
        };

        self.ticks_remaining = n.saturating_sub(1);
        if self.ticks_remaining == 0 {
            self.active = false;
            self.guaranteed_win = false;
            return Ok(SpinProgress::Finished);
        }
        Ok(SpinProgress::Spinning)
    }
}
