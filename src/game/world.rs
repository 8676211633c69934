// GameWorld owns the entities and drives the per-frame simulation:
// player update, scoring, enemy updates, collision, and the
// status transitions hanging off them.

use super::state::GameState;
use super::types::{
    ENEMY_HEIGHT, ENEMY_RELOAD_TIME, ENEMY_SPEED, ENEMY_WIDTH, FLOOR_Y, GRAVITY, GameStatus,
    PLAYER_HEIGHT, PLAYER_WIDTH, SCORE_RATE, SCREEN_WIDTH, SMALL_ENEMY_HEIGHT, SMALL_ENEMY_WIDTH,
};
use crate::collision::{boxes_overlap, Collidable};
use crate::enemy::Enemy;
use crate::input_system::InputState;
use crate::player::Player;
use crate::vec2::Vec2;
use rand::rngs::StdRng;

pub struct GameWorld {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    rng: StdRng,
}

impl GameWorld {
    /// The standard session: one dino on the floor line and three obstacles
    /// parked off-screen right, staggered in at 3, 5 and 10 seconds. The
    /// third one is drawn smaller, which also shrinks its hitbox.
    pub fn new(rng: StdRng) -> Self {
        let player = Player::new(
            Vec2::new(PLAYER_WIDTH * 0.5, FLOOR_Y),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            GRAVITY,
        );

        let enemies = vec![
            Enemy::new(
                Vec2::new(SCREEN_WIDTH + ENEMY_WIDTH * 0.5, FLOOR_Y),
                Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                ENEMY_SPEED,
                ENEMY_RELOAD_TIME,
                3.0,
            ),
            Enemy::new(
                Vec2::new(SCREEN_WIDTH + ENEMY_WIDTH * 0.5, FLOOR_Y),
                Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                ENEMY_SPEED,
                ENEMY_RELOAD_TIME,
                5.0,
            ),
            Enemy::new(
                Vec2::new(SCREEN_WIDTH + SMALL_ENEMY_WIDTH * 0.5, FLOOR_Y),
                Vec2::new(SMALL_ENEMY_WIDTH, SMALL_ENEMY_HEIGHT),
                ENEMY_SPEED,
                ENEMY_RELOAD_TIME,
                10.0,
            ),
        ];

        GameWorld {
            player,
            enemies,
            rng,
        }
    }

    /// One simulation step. The player always updates (it freezes itself
    /// while the run is over); everything else hangs off the global status.
    pub fn update(&mut self, dt: f32, state: &mut GameState, input: &InputState) {
        self.player.update(dt, state, input);

        match state.status {
            GameStatus::Playing => {
                state.add_score(dt * SCORE_RATE);

                for enemy in self.enemies.iter_mut() {
                    enemy.update(dt, &mut self.rng);
                }

                let player_bounds = self.player.bounds();
                let hit = self
                    .enemies
                    .iter()
                    .any(|enemy| boxes_overlap(&player_bounds, &enemy.bounds()));
                if hit {
                    state.status = GameStatus::Over;
                    state.restart_timer.trigger();
                }
            }
            GameStatus::Over => {
                if state.restart_timer.expired() {
                    state.restart_timer.cancel();
                    state.status = GameStatus::Restart;
                }
            }
            GameStatus::Restart => {
                if Self::restart_requested(state, input) {
                    state.status = GameStatus::Playing;
                    for enemy in self.enemies.iter_mut() {
                        enemy.reset();
                    }
                    self.player.reset();
                    state.set_score(0.0);
                }
            }
            GameStatus::Start => {}
        }
    }

    /// Re-engage from the restart prompt: jump keys work from anywhere,
    /// clicks and touch releases have to land on the button.
    fn restart_requested(state: &GameState, input: &InputState) -> bool {
        if input.jump_held() {
            return true;
        }

        let button = state.restart_button();
        let pointer_hit = input
            .pointer_down
            .map(|p| button.contains_point(p.x, p.y))
            .unwrap_or(false);
        let touch_hit = input
            .touch_end
            .map(|p| button.contains_point(p.x, p.y))
            .unwrap_or(false);

        pointer_hit || touch_hit
    }
}
