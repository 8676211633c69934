//! Data and error types for the high-score store.

use serde::{Deserialize, Serialize};

/// The on-disk record. Small enough to rewrite wholesale on every update.
#[derive(Debug, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub version: u32,
    pub hi_score: u32,
    pub updated_at: String,
}

#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationError(err)
    }
}

pub const CURRENT_STORE_VERSION: u32 = 1;
