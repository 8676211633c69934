use crate::animation::{AnimationController, AnimationState};
use crate::collision::{entity_bounds, BoxBounds, Collidable};
use crate::game::state::GameState;
use crate::game::types::{GameStatus, REVEAL_SPEED, SCREEN_WIDTH, VERTICAL_IMPULSE};
use crate::input_system::InputState;
use crate::vec2::Vec2;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Construction-time pose, restored verbatim by `reset`.
#[derive(Debug, Clone, Copy)]
struct PlayerSpawn {
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    status: AnimationState,
    grounded: bool,
}

pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Anchor offset from the top-left corner; bottom-center for the dino.
    pub pivot: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub status: AnimationState,
    pub grounded: bool,
    spawn: PlayerSpawn,
    animation_controller: AnimationController,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, gravity: f32) -> Self {
        let spawn = PlayerSpawn {
            pos,
            size,
            pivot: Vec2::new(size.x * 0.5, size.y),
            velocity: Vec2::zero(),
            acceleration: Vec2::new(0.0, gravity),
            status: AnimationState::Idle,
            grounded: true,
        };

        Player {
            pos: spawn.pos,
            size: spawn.size,
            pivot: spawn.pivot,
            velocity: spawn.velocity,
            acceleration: spawn.acceleration,
            status: spawn.status,
            grounded: spawn.grounded,
            spawn,
            animation_controller: AnimationController::new(),
        }
    }

    pub fn set_animation_controller(&mut self, controller: AnimationController) {
        self.animation_controller = controller;
    }

    /// Per-frame state resolution and kinematics.
    ///
    /// Transition priority: global over/restart freezes the player as dead;
    /// ducking beats jumping; jumping requires the ground under the feet.
    /// Ducking halves the hitbox and snaps the player down hard rather than
    /// shrinking in place, so a duck started mid-air becomes a fast drop.
    pub fn update(&mut self, dt: f32, game: &mut GameState, input: &InputState) {
        if game.status == GameStatus::Over || game.status == GameStatus::Restart {
            // Gameplay motion freezes; the animator keeps ticking below so
            // the death pose stays drawable.
            self.status = AnimationState::Dead;
        } else {
            if input.duck_held() {
                self.status = AnimationState::Ducking;
                self.velocity.y = VERTICAL_IMPULSE;
                self.size.y = self.spawn.size.y * 0.5;
                self.pivot.y = self.size.y;
            } else if self.grounded && (input.jump_held() || input.touch_start) {
                self.status = AnimationState::Jumping;
                self.grounded = false;
                self.velocity.y = -VERTICAL_IMPULSE;
                self.size.y = self.spawn.size.y;
                self.pivot.y = self.size.y;
            } else {
                // Airborne without input still reads as jumping.
                self.status = if self.grounded {
                    AnimationState::Running
                } else {
                    AnimationState::Jumping
                };
                self.size.y = self.spawn.size.y;
                self.pivot.y = self.size.y;
            }

            if game.status == GameStatus::Playing && game.showing_width() < SCREEN_WIDTH {
                game.set_showing_width(game.showing_width() + REVEAL_SPEED * dt);
            }

            self.pos.x += self.velocity.x * dt;
            self.pos.y += self.velocity.y * dt;
            self.velocity.x += self.acceleration.x * dt;
            self.velocity.y += self.acceleration.y * dt;

            // Ground clamp. The very first airborne landing is what starts
            // the run proper.
            if self.pos.y >= self.spawn.pos.y {
                if !self.grounded && game.status == GameStatus::Start {
                    game.status = GameStatus::Playing;
                }
                self.grounded = true;
                self.pos.y = self.spawn.pos.y;
                self.velocity.y = 0.0;
            }
        }

        self.animation_controller.set_state(self.status);
        self.animation_controller.update(dt);
    }

    pub fn reset(&mut self) {
        self.pos = self.spawn.pos;
        self.size = self.spawn.size;
        self.pivot = self.spawn.pivot;
        self.velocity = self.spawn.velocity;
        self.acceleration = self.spawn.acceleration;
        self.status = self.spawn.status;
        self.grounded = self.spawn.grounded;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: Option<&Texture>) -> Result<(), String> {
        // Image not loaded yet: skip this frame's draw.
        let Some(texture) = texture else {
            return Ok(());
        };

        let dest_rect = Rect::new(
            (self.pos.x - self.pivot.x).round() as i32,
            (self.pos.y - self.pivot.y).round() as i32,
            self.size.x.round() as u32,
            self.size.y.round() as u32,
        );

        if let Some(sheet) = self.animation_controller.current_sheet() {
            sheet.render(canvas, texture, dest_rect)
        } else {
            canvas.set_draw_color(sdl2::pixels::Color::RGB(255, 0, 0));
            canvas.fill_rect(dest_rect).map_err(|e| e.to_string())
        }
    }
}

impl Collidable for Player {
    fn bounds(&self) -> BoxBounds {
        entity_bounds(self.pos, self.pivot, self.size)
    }
}
