//! Whole-blob JSON persistence for the character.
//!
//! The save is one versioned JSON object. Fields added after the first
//! release are backfilled by serde defaults on load, so any prior-version
//! blob deserializes into a current [`Character`]. A blob that does not
//! parse at all is reported as [`SaveError::Corrupted`]; callers recover
//! by starting from a fresh character rather than surfacing the failure.

use crate::character::Character;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

const SAVE_FILE: &str = "save.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The blob exists but is not a parseable character.
    #[error("corrupted save: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Reads and writes the character save file at the platform config
/// location.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save directory at the appropriate location for the
    /// platform using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "arcanum").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE),
        })
    }

    /// Creates a SaveManager for testing with a unique temporary directory.
    #[cfg(test)]
    pub(crate) fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("arcanum-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            save_path: temp_dir.join(SAVE_FILE),
        })
    }

    /// Serializes the character and writes the whole blob.
    pub fn save(&self, character: &Character) -> Result<(), SaveError> {
        let blob = serde_json::to_vec(character)?;
        fs::write(&self.save_path, blob)?;
        Ok(())
    }

    /// Loads the character from disk. Missing newer fields are backfilled
    /// by the schema defaults; an unparseable blob is `Corrupted`.
    pub fn load(&self) -> Result<Character, SaveError> {
        let blob = fs::read(&self.save_path)?;
        Ok(serde_json::from_slice(&blob)?)
    }

    /// Loads the saved character, falling back to a fresh one when there
    /// is no save or the blob is corrupted. The corrupted case is logged
    /// and discarded; it never propagates.
    pub fn load_or_default(&self, fresh: impl FnOnce() -> Character) -> Character {
        match self.load() {
            Ok(character) => character,
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => fresh(),
            Err(e) => {
                log::warn!("discarding unreadable save ({e}); starting fresh");
                fresh()
            }
        }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
