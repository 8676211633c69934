// Session-wide game state: the status machine, scoring, the reveal wipe
// and the restart plumbing. Owned by the orchestrator; entities get a
// mutable reference during their update.

use super::types::{
    GameStatus, MAX_VIEWPORT_WIDTH, RESTART_BUTTON_HEIGHT, RESTART_BUTTON_WIDTH, RESTART_FREEZE,
    SCREEN_HEIGHT,
};
use crate::collision::BoxBounds;
use crate::save::HighScoreStore;
use std::time::{Duration, Instant};

/// Cancellable one-shot timer for the over → restart freeze.
///
/// Armed on the collision frame and polled from the frame loop against
/// real elapsed time, so the freeze length does not depend on the frame
/// rate. Dropping the owning state cancels it implicitly.
#[derive(Debug)]
pub struct RestartTimer {
    duration: Duration,
    armed_at: Option<Instant>,
}

impl RestartTimer {
    pub fn new() -> Self {
        Self::with_duration(RESTART_FREEZE)
    }

    pub fn with_duration(duration: Duration) -> Self {
        RestartTimer {
            duration,
            armed_at: None,
        }
    }

    pub fn trigger(&mut self) {
        self.armed_at = Some(Instant::now());
    }

    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn expired(&self) -> bool {
        match self.armed_at {
            Some(armed_at) => armed_at.elapsed() >= self.duration,
            None => false,
        }
    }
}

impl Default for RestartTimer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GameState {
    pub status: GameStatus,
    score: f32,
    hi_score: f32,
    showing_width: f32,
    viewport_width: u32,
    restart_button: BoxBounds,
    pub restart_timer: RestartTimer,
    store: HighScoreStore,
}

impl GameState {
    /// New session: the persisted high score is read once, up front.
    pub fn new(store: HighScoreStore) -> Self {
        let hi_score = store.load();
        let mut state = GameState {
            status: GameStatus::Start,
            score: 0.0,
            hi_score,
            showing_width: 0.0,
            viewport_width: MAX_VIEWPORT_WIDTH,
            restart_button: BoxBounds::new(0.0, 0.0, 0.0, 0.0),
            restart_timer: RestartTimer::new(),
            store,
        };
        state.set_viewport_width(MAX_VIEWPORT_WIDTH);
        state
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn hi_score(&self) -> f32 {
        self.hi_score
    }

    /// Every high-score increase is written through immediately; a failed
    /// write is reported and gameplay continues.
    pub fn set_score(&mut self, score: f32) {
        self.score = score;
        if score > self.hi_score {
            self.hi_score = score;
            if let Err(e) = self.store.save(score) {
                eprintln!("Failed to persist high score: {}", e);
            }
        }
    }

    pub fn add_score(&mut self, amount: f32) {
        self.set_score(self.score + amount);
    }

    pub fn showing_width(&self) -> f32 {
        self.showing_width
    }

    pub fn set_showing_width(&mut self, width: f32) {
        self.showing_width = width;
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Resize notification: clamp the usable width and re-derive the
    /// centered restart-button rect from it.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width.min(MAX_VIEWPORT_WIDTH);
        let w = self.viewport_width as f32;
        self.restart_button = BoxBounds::new(
            (w - RESTART_BUTTON_WIDTH) * 0.5,
            SCREEN_HEIGHT * 0.7 - RESTART_BUTTON_HEIGHT * 0.5,
            RESTART_BUTTON_WIDTH,
            RESTART_BUTTON_HEIGHT,
        );
    }

    pub fn restart_button(&self) -> BoxBounds {
        self.restart_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn test_state() -> (GameState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path()).unwrap();
        (GameState::new(store), dir)
    }

    #[test]
    fn high_score_rises_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = HighScoreStore::new(dir.path()).unwrap();
            let mut state = GameState::new(store);
            state.set_score(120.7);
            assert_eq!(state.hi_score(), 120.7);
            state.set_score(80.0);
            assert_eq!(state.hi_score(), 120.7);
        }

        // A fresh session reads the rounded record back.
        let store = HighScoreStore::new(dir.path()).unwrap();
        let state = GameState::new(store);
        assert_eq!(state.hi_score(), 121.0);
    }

    #[test]
    fn restart_button_recenters_on_resize() {
        let (mut state, _dir) = test_state();
        let centered = state.restart_button();
        assert_eq!(centered.x, (600.0 - RESTART_BUTTON_WIDTH) * 0.5);

        state.set_viewport_width(400);
        assert_eq!(state.viewport_width(), 400);
        assert_eq!(
            state.restart_button().x,
            (400.0 - RESTART_BUTTON_WIDTH) * 0.5
        );
    }

    #[test]
    fn viewport_width_clamps_to_maximum() {
        let (mut state, _dir) = test_state();
        state.set_viewport_width(2000);
        assert_eq!(state.viewport_width(), MAX_VIEWPORT_WIDTH);
    }

    #[test]
    fn restart_timer_fires_after_duration() {
        let mut timer = RestartTimer::with_duration(Duration::from_millis(20));
        assert!(!timer.expired());

        timer.trigger();
        assert!(timer.is_armed());
        assert!(!timer.expired());

        thread::sleep(Duration::from_millis(30));
        assert!(timer.expired());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = RestartTimer::with_duration(Duration::from_millis(5));
        timer.trigger();
        timer.cancel();

        thread::sleep(Duration::from_millis(10));
        assert!(!timer.expired());
    }
}
