//! Core session state, configuration and intent dispatch.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod intent;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use game_state::*;
pub use intent::*;
