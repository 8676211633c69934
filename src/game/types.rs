// Shared enums, tuning constants and helper structs used throughout the game

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::time::Duration;

/// Global game state machine.
///
/// `Start` waits for the first jump-and-land cycle, `Over` is the short
/// post-collision freeze, `Restart` waits for the player to re-engage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Start,
    Playing,
    Over,
    Restart,
}

// Logical canvas, in pixels. The window is an integer multiple of this.
pub const SCREEN_WIDTH: f32 = 600.0;
pub const SCREEN_HEIGHT: f32 = 300.0;
pub const FLOOR_Y: f32 = SCREEN_HEIGHT * 0.9;
pub const MAX_VIEWPORT_WIDTH: u32 = SCREEN_WIDTH as u32;

// Kinematics tuning.
pub const GRAVITY: f32 = 3000.0;
/// Vertical impulse magnitude: applied upward on jump, downward on duck.
pub const VERTICAL_IMPULSE: f32 = 700.0;

// Source art is 50x93 (player) and 794x848 (enemy), drawn scaled down.
pub const PLAYER_WIDTH: f32 = 50.0 / 1.5;
pub const PLAYER_HEIGHT: f32 = 93.0 / 1.5;
pub const ENEMY_WIDTH: f32 = 794.0 / 18.0;
pub const ENEMY_HEIGHT: f32 = 848.0 / 18.0;
pub const SMALL_ENEMY_WIDTH: f32 = 794.0 / 30.0;
pub const SMALL_ENEMY_HEIGHT: f32 = 848.0 / 30.0;

/// Enemies scroll one screen width per second.
pub const ENEMY_SPEED: f32 = SCREEN_WIDTH;
pub const ENEMY_RELOAD_TIME: f32 = 3.0;

pub const SCORE_RATE: f32 = 10.0;
/// Reveal wipe advances at twice the screen width per second.
pub const REVEAL_SPEED: f32 = SCREEN_WIDTH * 2.0;

/// Freeze between the collision frame and the restart prompt.
pub const RESTART_FREEZE: Duration = Duration::from_millis(1000);
pub const RESTART_BUTTON_WIDTH: f32 = 44.0;
pub const RESTART_BUTTON_HEIGHT: f32 = 35.0;

/// Helper struct to hold all game textures.
///
/// Every slot is optional: a texture that fails to load is reported and
/// skipped at draw time rather than aborting the session.
pub struct GameTextures<'a> {
    pub player: Option<Texture<'a>>,
    pub enemy: Option<Texture<'a>>,
    pub game_over: Option<Texture<'a>>,
    pub restart_btn: Option<Texture<'a>>,
}

impl<'a> GameTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        GameTextures {
            player: try_load_texture(texture_creator, "assets/dino.png"),
            enemy: try_load_texture(texture_creator, "assets/dino-reverse.png"),
            game_over: try_load_texture(texture_creator, "assets/ui/game-over.png"),
            restart_btn: try_load_texture(texture_creator, "assets/ui/restart-btn.png"),
        }
    }
}

fn try_load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            None
        }
    }
}
