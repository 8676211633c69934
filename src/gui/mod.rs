//! Screen-Space GUI
//!
//! Overlays drawn at fixed screen positions on top of the world entities.

pub mod game_over;

pub use game_over::GameOverScreen;
