//! High-score persistence.
//!
//! One number survives the session, so the store is deliberately small: a
//! single versioned JSON file under the platform data directory, read once
//! at startup and rewritten whenever the high score rises.

use super::types::{CURRENT_STORE_VERSION, HighScoreRecord, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(HighScoreStore {
            path: dir.join("hi_score.json"),
        })
    }

    /// Store under the platform data directory, falling back to the
    /// working directory when the platform offers none.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("dino-dash"))
    }

    /// The persisted high score. An absent or unreadable file reads as 0
    /// rather than failing the session.
    pub fn load(&self) -> f32 {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return 0.0;
        };

        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) => record.hi_score as f32,
            Err(e) => {
                eprintln!("Ignoring corrupt high-score file: {}", e);
                0.0
            }
        }
    }

    /// Writes the score, rounded to a whole number.
    pub fn save(&self, score: f32) -> Result<(), StoreError> {
        let record = HighScoreRecord {
            version: CURRENT_STORE_VERSION,
            hi_score: score.round() as u32,
            updated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path()).unwrap();

        assert_eq!(store.load(), 0.0);
    }

    #[test]
    fn save_then_load_round_trips_rounded() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path()).unwrap();

        store.save(123.6).unwrap();

        assert_eq!(store.load(), 124.0);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path()).unwrap();
        fs::write(store.path(), "not json {").unwrap();

        assert_eq!(store.load(), 0.0);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper/still");

        let store = HighScoreStore::new(&nested).unwrap();
        store.save(10.0).unwrap();

        assert!(nested.join("hi_score.json").exists());
    }

    #[test]
    fn record_is_versioned_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path()).unwrap();
        store.save(42.0).unwrap();

        let json = fs::read_to_string(store.path()).unwrap();
        let record: HighScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.version, CURRENT_STORE_VERSION);
        assert_eq!(record.hi_score, 42);
        assert!(!record.updated_at.is_empty());
    }
}
