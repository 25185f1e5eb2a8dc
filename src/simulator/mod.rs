//! Headless balance simulator.
//!
//! Drives the same [`handle_intent`](crate::core::intent::handle_intent)
//! path the terminal uses, one tick at a time, and tallies every
//! [`SpinEvent`](crate::economy::SpinEvent) into a report.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
