//! Runtime configuration: where to save and which game features are on.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::constants::{GUARANTEED_WIN_PERCENT, SAVE_DIR_NAME, SAVE_FILE_NAME};
use crate::reels::{Symbol, WeightTable};

/// Optional mechanics. A disabled feature's symbol never appears on a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub fever: bool,
    pub free_spins: bool,
    pub penalty: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            fever: true,
            free_spins: true,
            penalty: true,
        }
    }
}

impl FeatureFlags {
    /// Symbols pinned to zero weight by the current flags.
    pub fn disabled_symbols(&self) -> Vec<Symbol> {
        let mut disabled = Vec::new();
        if !self.fever {
            disabled.push(Symbol::Fever);
        }
        if !self.free_spins {
            disabled.push(Symbol::FreeSpin);
        }
        if !self.penalty {
            disabled.push(Symbol::Penalty);
        }
        disabled
    }

    /// Zero out every disabled symbol. Numeric faces are never touched.
    pub fn mask(&self, table: &mut WeightTable) {
        for symbol in self.disabled_symbols() {
            table.set(symbol, 0);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Snapshot location. `None` keeps the session in memory only.
    pub save_path: Option<PathBuf>,
    pub features: FeatureFlags,
    /// Chance in percent that a spin is pre-selected to win.
    pub guaranteed_win_percent: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            features: FeatureFlags::default(),
            guaranteed_win_percent: GUARANTEED_WIN_PERCENT,
        }
    }
}

impl GameConfig {
    pub fn with_save_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Starting table for a fresh session under these flags.
    pub fn base_table(&self) -> WeightTable {
        let mut table = WeightTable::base();
        self.features.mask(&mut table);
        table
    }
}

/// `~/.jackpot/`, created if needed.
pub fn jackpot_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default snapshot path, `~/.jackpot/save.json`.
pub fn default_save_path() -> io::Result<PathBuf> {
    Ok(jackpot_dir()?.join(SAVE_FILE_NAME))
}
