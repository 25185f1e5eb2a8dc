//! Jackpot - Terminal Slot Machine Library
//!
//! This module exposes the spin engine, economy and session lifecycle for
//! the binary, the simulator and tests.

pub mod core;
pub mod economy;
pub mod reels;
pub mod session;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::config::{FeatureFlags, GameConfig};
pub use crate::core::constants::*;
pub use crate::core::error::SlotError;
pub use crate::core::game_state::SessionState;
pub use crate::core::intent::{handle_intent, Directive, Intent, IntentOutcome};
pub use crate::economy::SpinEvent;
pub use crate::reels::{evaluate, MatchOutcome, Slot, SpinState, Symbol, WeightTable};
pub use crate::session::Session;
