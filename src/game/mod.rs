// Game module - session state and the per-frame orchestration
//
// This module contains:
// - types.rs: the status enum, tuning constants, texture bundle
// - state.rs: GameState (score, hi-score, reveal width, restart plumbing)
// - world.rs: GameWorld (entities) and the simulation step
// - rendering.rs: the per-frame draw pass

pub mod rendering;
pub mod state;
pub mod types;
pub mod world;

pub use state::GameState;
pub use types::*;
pub use world::GameWorld;
