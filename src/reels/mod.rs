//! Reels: symbols, weighted draws, match evaluation and the spin countdown.

#![allow(unused_imports)]

pub mod matching;
pub mod spin;
pub mod symbols;
pub mod weights;

pub use matching::*;
pub use spin::*;
pub use symbols::*;
pub use weights::*;
