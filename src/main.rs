use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

mod animation;
mod collision;
mod enemy;
mod game;
mod gui;
mod input_system;
mod player;
mod save;
mod sprite;
mod text;
mod vec2;

use animation::{AnimationConfig, AnimationState};
use game::rendering::draw_frame;
use game::{GameState, GameTextures, GameWorld, SCREEN_HEIGHT, SCREEN_WIDTH};
use gui::GameOverScreen;
use input_system::{InputState, InputSystem};
use rand::SeedableRng;
use rand::rngs::StdRng;
use save::HighScoreStore;
use std::time::Instant;

const GAME_WIDTH: u32 = SCREEN_WIDTH as u32;
const GAME_HEIGHT: u32 = SCREEN_HEIGHT as u32;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            // Use smaller scale to ensure both dimensions fit
            let scale = max_scale_w.min(max_scale_h);

            scale.clamp(1, 4) as u32
        }
        Err(_) => {
            println!("Warning: Could not detect monitor size, using 1x scale");
            1
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;

    println!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale, window_width, window_height
    );

    let window = video_subsystem
        .window("Dino Dash", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps all drawing in game coordinates regardless of the
    // window scale.
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let textures = GameTextures::load(&texture_creator);
    let mut event_pump = sdl_context.event_pump()?;

    let player_config = AnimationConfig::load_from_file("config/player_animations.json")
        .map_err(|e| format!("Failed to load player animation config: {}", e))?;
    let enemy_config = AnimationConfig::load_from_file("config/enemy_animations.json")
        .map_err(|e| format!("Failed to load enemy animation config: {}", e))?;

    let store = HighScoreStore::open_default().map_err(|e| e.to_string())?;
    println!("High score file: {}", store.path().display());
    let mut state = GameState::new(store);

    let mut world = GameWorld::new(StdRng::from_entropy());
    world
        .player
        .set_animation_controller(player_config.create_controller(&[
            AnimationState::Idle,
            AnimationState::Running,
            AnimationState::Jumping,
            AnimationState::Ducking,
            AnimationState::Dead,
        ]));
    for enemy in world.enemies.iter_mut() {
        enemy.set_animation_controller(enemy_config.create_controller(&[AnimationState::Running]));
    }

    // The intro wipe starts just past the idle dino.
    state.set_showing_width(world.player.size.x + 20.0);

    let game_over_screen = GameOverScreen::new();
    let mut input_system = InputSystem::new((GAME_WIDTH, GAME_HEIGHT), window_scale);
    let mut input = InputState::new();

    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => {
                    let logical_w = (w.max(0) as u32) / window_scale;
                    let logical_h = (h.max(0) as u32) / window_scale;
                    state.set_viewport_width(logical_w);
                    input_system.set_viewport((state.viewport_width(), logical_h.min(GAME_HEIGHT)));
                }
                other => input_system.process_event(&other, &mut input),
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        world.update(dt, &mut state, &input);
        // Touch values are single-frame; drop them now that the update
        // pass has seen them.
        input.end_frame();

        draw_frame(&mut canvas, &world, &state, &textures, &game_over_screen)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
