//! Game-Over Overlay
//!
//! Draws the centered "game over" banner during the post-collision freeze
//! and the restart button once the freeze has elapsed. Pure rendering: the
//! freeze timer and the button geometry live in `GameState`.

use crate::game::state::GameState;
use crate::game::types::{GameStatus, GameTextures, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

// Banner source art is 118x10, drawn at 2x.
const BANNER_WIDTH: u32 = 118 * 2;
const BANNER_HEIGHT: u32 = 10 * 2;

/// Colors for the texture-less fallback rendering.
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub banner_color: Color,
    pub button_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            banner_color: Color::RGB(83, 83, 83),
            button_color: Color::RGB(83, 83, 83),
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        state: &GameState,
        textures: &GameTextures,
    ) -> Result<(), String> {
        if state.status != GameStatus::Over && state.status != GameStatus::Restart {
            return Ok(());
        }

        let banner_rect = Rect::new(
            ((SCREEN_WIDTH - BANNER_WIDTH as f32) * 0.5) as i32,
            ((SCREEN_HEIGHT - BANNER_HEIGHT as f32) * 0.5) as i32,
            BANNER_WIDTH,
            BANNER_HEIGHT,
        );
        match &textures.game_over {
            Some(texture) => canvas
                .copy(texture, None, banner_rect)
                .map_err(|e| e.to_string())?,
            None => {
                let text = "GAME OVER";
                let scale = 2;
                draw_simple_text(
                    canvas,
                    text,
                    (SCREEN_WIDTH as i32 - text_width(text, scale) as i32) / 2,
                    banner_rect.y(),
                    self.style.banner_color,
                    scale,
                )?;
            }
        }

        if state.status == GameStatus::Restart {
            let button = state.restart_button();
            let button_rect = Rect::new(
                button.x as i32,
                button.y as i32,
                button.w as u32,
                button.h as u32,
            );
            match &textures.restart_btn {
                Some(texture) => canvas
                    .copy(texture, None, button_rect)
                    .map_err(|e| e.to_string())?,
                None => {
                    canvas.set_draw_color(self.style.button_color);
                    canvas.draw_rect(button_rect).map_err(|e| e.to_string())?;
                }
            }
        }

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
