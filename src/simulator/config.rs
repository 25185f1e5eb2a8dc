//! Simulation configuration.

use crate::core::config::{FeatureFlags, GameConfig};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of spins to attempt
    pub num_spins: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Which optional symbols stay on the reels
    pub features: FeatureFlags,

    /// Buy token packs with winnings when tokens run out
    pub auto_purchase: bool,

    /// Log verbosity (0 = report only, 1 = settings and progress, 2 = every spin)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_spins: 10_000,
            seed: None,
            features: FeatureFlags::default(),
            auto_purchase: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Engine config for the simulated session. Never saves.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            save_path: None,
            features: self.features,
            ..GameConfig::default()
        }
    }
}
