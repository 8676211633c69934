// Per-frame drawing. A pure function of the current state: clear, entities,
// HUD, floor line, overlays, then the reveal mask. No state mutation here.

use super::state::GameState;
use super::types::{FLOOR_Y, GameTextures, SCREEN_HEIGHT, SCREEN_WIDTH};
use super::world::GameWorld;
use crate::gui::GameOverScreen;
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND: Color = Color::RGB(255, 255, 255);
const HUD_COLOR: Color = Color::RGB(172, 172, 172);
const HUD_TEXT_SCALE: u32 = 2;
const HUD_MARGIN: i32 = 20;
const HUD_Y: i32 = 100;

pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    state: &GameState,
    textures: &GameTextures,
    game_over_screen: &GameOverScreen,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    world.player.render(canvas, textures.player.as_ref())?;
    for enemy in &world.enemies {
        enemy.render(canvas, textures.enemy.as_ref())?;
    }

    // Score readout, right-aligned against the usable width.
    let hud = format!(
        "HI {} {}",
        state.hi_score().round() as u32,
        state.score().round() as u32
    );
    let hud_x = state.viewport_width() as i32 - HUD_MARGIN - text_width(&hud, HUD_TEXT_SCALE) as i32;
    draw_simple_text(canvas, &hud, hud_x, HUD_Y, HUD_COLOR, HUD_TEXT_SCALE)?;

    canvas.set_draw_color(HUD_COLOR);
    canvas
        .draw_line(
            Point::new(0, FLOOR_Y as i32),
            Point::new(SCREEN_WIDTH as i32, FLOOR_Y as i32),
        )
        .map_err(|e| e.to_string())?;

    game_over_screen.render(canvas, state, textures)?;

    // Session-start wipe: blank everything right of the reveal edge.
    if state.showing_width() < SCREEN_WIDTH {
        let edge = state.showing_width().max(0.0);
        canvas.set_draw_color(BACKGROUND);
        canvas
            .fill_rect(Rect::new(
                edge as i32,
                0,
                (SCREEN_WIDTH - edge).ceil() as u32,
                SCREEN_HEIGHT as u32,
            ))
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
