use crate::animation::{AnimationController, AnimationState};
use crate::collision::{entity_bounds, BoxBounds, Collidable};
use crate::vec2::Vec2;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Construction-time pose, restored verbatim by `reset`.
#[derive(Debug, Clone, Copy)]
struct EnemySpawn {
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    respawn_delay: f32,
}

/// A scrolling obstacle.
///
/// Spawns off-screen right and scrolls left; once its right edge clears the
/// left viewport edge it teleports back to the spawn column and sits out a
/// randomized respawn delay so the obstacles never fall into lockstep.
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub pivot: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub status: AnimationState,
    /// Countdown before the obstacle resumes scrolling.
    pub respawn_delay: f32,
    speed: f32,
    reload_time: f32,
    spawn: EnemySpawn,
    animation_controller: AnimationController,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, reload_time: f32, start_delay: f32) -> Self {
        let spawn = EnemySpawn {
            pos,
            size,
            pivot: Vec2::new(size.x * 0.5, size.y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            respawn_delay: start_delay,
        };

        Enemy {
            pos: spawn.pos,
            size: spawn.size,
            pivot: spawn.pivot,
            velocity: spawn.velocity,
            acceleration: spawn.acceleration,
            status: AnimationState::Running,
            respawn_delay: spawn.respawn_delay,
            speed,
            reload_time,
            spawn,
            animation_controller: AnimationController::new(),
        }
    }

    pub fn set_animation_controller(&mut self, mut controller: AnimationController) {
        // Obstacles only ever run.
        controller.set_state(AnimationState::Running);
        self.animation_controller = controller;
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.pos.x += self.velocity.x * dt;
        self.pos.y += self.velocity.y * dt;
        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;

        // Fully off-screen left: wrap back to the spawn column and pause.
        if self.pos.x - self.pivot.x + self.size.x < 0.0 {
            self.pos.x = self.spawn.pos.x;
            self.respawn_delay = self.reload_time * rng.gen_range(0.5..1.2);
        }

        if self.respawn_delay <= 0.0 {
            self.velocity.x = -self.speed;
        } else {
            self.velocity.x = 0.0;
            self.respawn_delay -= dt;
        }

        self.animation_controller.update(dt);
    }

    pub fn reset(&mut self) {
        self.pos = self.spawn.pos;
        self.size = self.spawn.size;
        self.pivot = self.spawn.pivot;
        self.velocity = self.spawn.velocity;
        self.acceleration = self.spawn.acceleration;
        self.status = AnimationState::Running;
        self.respawn_delay = self.spawn.respawn_delay;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, texture: Option<&Texture>) -> Result<(), String> {
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

impl Collidable for Enemy {
    fn bounds(&self) -> BoxBounds {
        entity_bounds(self.pos, self.pivot, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{ENEMY_HEIGHT, ENEMY_RELOAD_TIME, ENEMY_SPEED, ENEMY_WIDTH, FLOOR_Y, SCREEN_WIDTH};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 1.0 / 60.0;

    fn test_enemy(start_delay: f32) -> Enemy {
        Enemy::new(
            Vec2::new(SCREEN_WIDTH + ENEMY_WIDTH * 0.5, FLOOR_Y),
            Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            ENEMY_SPEED,
            ENEMY_RELOAD_TIME,
            start_delay,
        )
    }

    #[test]
    fn holds_still_until_start_delay_elapses() {
        let mut enemy = test_enemy(0.5);
        let mut rng = StdRng::seed_from_u64(42);
        let spawn_x = enemy.pos.x;

        for _ in 0..20 {
            enemy.update(DT, &mut rng);
        }

        assert_eq!(enemy.pos.x, spawn_x);
        assert!(enemy.respawn_delay > 0.0);
    }

    #[test]
    fn scrolls_left_once_delay_expires() {
        let mut enemy = test_enemy(0.0);
        let mut rng = StdRng::seed_from_u64(42);
        let spawn_x = enemy.pos.x;

        enemy.update(DT, &mut rng); // arms velocity
        enemy.update(DT, &mut rng);

        assert!(enemy.pos.x < spawn_x);
        assert_eq!(enemy.velocity.x, -ENEMY_SPEED);
    }

    #[test]
    fn wraps_to_spawn_with_randomized_delay() {
        let mut enemy = test_enemy(0.0);
        let mut rng = StdRng::seed_from_u64(42);
        let spawn_x = enemy.pos.x;

        let mut frames = 0;
        loop {
            enemy.update(DT, &mut rng);
            frames += 1;
            assert!(frames < 600, "enemy never wrapped");
            if enemy.respawn_delay > 0.0 {
                break;
            }
        }

        assert_eq!(enemy.pos.x, spawn_x);
        assert!(enemy.respawn_delay >= 0.5 * ENEMY_RELOAD_TIME - DT);
        assert!(enemy.respawn_delay <= 1.2 * ENEMY_RELOAD_TIME);
        assert_eq!(enemy.velocity.x, 0.0);
    }

    #[test]
    fn reset_restores_construction_pose() {
        let mut enemy = test_enemy(1.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..120 {
            enemy.update(DT, &mut rng);
        }

        enemy.reset();

        let fresh = test_enemy(1.0);
        assert_eq!(enemy.pos, fresh.pos);
        assert_eq!(enemy.size, fresh.size);
        assert_eq!(enemy.pivot, fresh.pivot);
        assert_eq!(enemy.velocity, fresh.velocity);
        assert_eq!(enemy.acceleration, fresh.acceleration);
        assert_eq!(enemy.respawn_delay, fresh.respawn_delay);
        assert_eq!(enemy.status, AnimationState::Running);
    }
}
