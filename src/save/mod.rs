//! High-score persistence for dino-dash.
//!
//! - `types`: the on-disk record and error types
//! - `store`: `HighScoreStore` for file operations

pub mod store;
pub mod types;

pub use store::HighScoreStore;
pub use types::{CURRENT_STORE_VERSION, HighScoreRecord, StoreError};
