//! Win effects, jackpot pool and day/night mode changes.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
