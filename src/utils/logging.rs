//! File-backed tracing setup.
//!
//! The terminal belongs to the slot screen, so log lines go to
//! `~/.jackpot/jackpot.log` instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Install a global fmt subscriber appending to `path`.
///
/// Calling this twice is harmless; the second subscriber is dropped.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
