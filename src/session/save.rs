use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::constants::SCHEMA_VERSION;
use crate::core::game_state::SessionState;

/// Only the version tag, read before the full snapshot.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default)]
    schema_version: String,
}

/// Reads and writes the JSON session snapshot.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "jackpot-save-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self::new(temp_dir.join("save.json")))
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Write the snapshot atomically.
    ///
    /// The JSON goes to a sibling temp file first and is renamed over the
    /// real save, so a crash mid-write never leaves a truncated snapshot.
    pub fn save(&self, state: &SessionState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.save_path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.save_path)?;

        Ok(())
    }

    /// Load the snapshot.
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The schema version differs from this build's
    /// - The data cannot be deserialized
    pub fn load(&self) -> io::Result<SessionState> {
        let json = fs::read_to_string(&self.save_path)?;

        let probe: VersionProbe = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if probe.schema_version != SCHEMA_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Save schema version mismatch: expected {:?}, got {:?}",
                    SCHEMA_VERSION, probe.schema_version
                ),
            ));
        }

        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::reels::Symbol;

    #[test]
    fn test_save_and_load() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        let mut original = SessionState::new(&GameConfig::default(), 1_234_567_890);
        original.tokens = 12;
        original.currency = 340;
        original.jackpot_pool = 25;
        original.multiplier = 5;
        original.is_daytime = false;
        original.weights.apply_nighttime_weights();
        original.slot = [Symbol::Three, Symbol::Wild, Symbol::Three];

        manager.save(&original).expect("Failed to save session");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load session");
        assert_eq!(loaded, original);

        fs::remove_file(manager.path()).expect("Failed to remove save file");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let manager = SaveManager::new_for_test().unwrap();
        let state = SessionState::new(&GameConfig::default(), 0);
        manager.save(&state).unwrap();

        assert!(!manager.path().with_extension("json.tmp").exists());
        fs::remove_file(manager.path()).ok();
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = SaveManager::new_for_test().unwrap();
        let result = manager.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_version_mismatch() {
        let manager = SaveManager::new_for_test().unwrap();
        let mut state = SessionState::new(&GameConfig::default(), 0);
        state.schema_version = "0.3".to_string();
        manager.save(&state).unwrap();

        let result = manager.load();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        fs::remove_file(manager.path()).ok();
    }

    #[test]
    fn test_load_garbage() {
        let manager = SaveManager::new_for_test().unwrap();
        fs::write(manager.path(), "{ not json").unwrap();

        let result = manager.load();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        fs::remove_file(manager.path()).ok();
    }
}
