use std::io;

use thiserror::Error;

/// Failures the spin engine and the session layer can surface.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Every weight in the active table is zero, so nothing can be drawn.
    #[error("degenerate symbol distribution: total weight is zero")]
    DegenerateDistribution,
    /// Snapshot write failed. Encoding errors arrive here as `InvalidData`.
    #[error("failed to write save file: {0}")]
    Save(#[from] io::Error),
}
