//! Utility modules: build info and logging.

#![allow(unused_imports)]

pub mod build_info;
pub mod logging;

pub use build_info::*;
pub use logging::*;
