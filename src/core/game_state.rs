use serde::{Deserialize, Serialize};

use crate::core::config::{FeatureFlags, GameConfig};
use crate::core::constants::{SCHEMA_VERSION, STARTING_TOKENS};
use crate::reels::{Slot, SpinState, Symbol, WeightTable};

/// Everything a running session owns. Saved and loaded as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub tokens: i64,
    pub currency: i64,
    pub jackpot_pool: i64,
    pub multiplier: u32,
    pub fever_active: bool,
    pub free_spin_pending: bool,
    pub is_daytime: bool,
    pub weights: WeightTable,
    pub slot: Slot,
    pub spin: SpinState,
    pub last_message: String,
    /// Unix seconds.
    pub last_played: i64,
    pub schema_version: String,
}

impl SessionState {
    /// A fresh session with the starting balances.
    pub fn new(config: &GameConfig, current_time: i64) -> Self {
        Self {
            tokens: STARTING_TOKENS,
            currency: 0,
            jackpot_pool: 0,
            multiplier: 1,
            fever_active: false,
            free_spin_pending: false,
            is_daytime: true,
            weights: config.base_table(),
            slot: [Symbol::Idle; 3],
            spin: SpinState::new(),
            last_message: "Spin to win!".to_string(),
            last_played: current_time,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_active()
    }

    /// Bring a loaded snapshot in line with the current feature flags.
    ///
    /// Disabled symbols drop to zero weight and any pending effect of a
    /// disabled feature is cleared.
    pub fn apply_features(&mut self, features: &FeatureFlags) {
        features.mask(&mut self.weights);
        if !features.fever {
            self.fever_active = false;
        }
        if !features.free_spins {
            self.free_spin_pending = false;
        }
    }
}
