use crate::vec2::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use std::collections::HashSet;

/// The keys the game tracks. Everything else is ignored at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Up,
    Down,
    Space,
}

impl GameKey {
    fn from_keycode(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Up => Some(GameKey::Up),
            Keycode::Down => Some(GameKey::Down),
            Keycode::Space => Some(GameKey::Space),
            _ => None,
        }
    }
}

/// Input snapshot consumed by the frame update pass.
///
/// Key state is level-triggered: a key stays in the held set until its
/// key-up arrives. The pointer-down point likewise persists until the
/// button is released. Touch values are edge-triggered: they are visible
/// to exactly one update pass and dropped by `end_frame`.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<GameKey>,
    pub pointer_down: Option<Vec2>,
    pub touch_start: bool,
    pub touch_end: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: GameKey) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: GameKey) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    pub fn jump_held(&self) -> bool {
        self.is_held(GameKey::Up) || self.is_held(GameKey::Space)
    }

    pub fn duck_held(&self) -> bool {
        self.is_held(GameKey::Down)
    }

    /// Drop the edge-triggered values once the update pass has seen them.
    pub fn end_frame(&mut self) {
        self.touch_start = false;
        self.touch_end = None;
    }
}

/// Translates raw SDL events into `InputState` mutations.
///
/// Only flags and queued points are set here; entity state is touched
/// exclusively by the frame update pass.
pub struct InputSystem {
    /// Logical viewport, used to scale normalized finger coordinates.
    viewport: (u32, u32),
    /// Window-to-logical divisor for mouse coordinates.
    window_scale: u32,
}

impl InputSystem {
    pub fn new(viewport: (u32, u32), window_scale: u32) -> Self {
        InputSystem {
            viewport,
            window_scale: window_scale.max(1),
        }
    }

    pub fn set_viewport(&mut self, viewport: (u32, u32)) {
        self.viewport = viewport;
    }

    pub fn process_event(&self, event: &Event, input: &mut InputState) {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = GameKey::from_keycode(*keycode) {
                    input.press(key);
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = GameKey::from_keycode(*keycode) {
                    input.release(key);
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                // Mouse events arrive in window pixels; bring them into
                // logical coordinates.
                input.pointer_down = Some(Vec2::new(
                    *x as f32 / self.window_scale as f32,
                    *y as f32 / self.window_scale as f32,
                ));
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                input.pointer_down = None;
            }
            Event::FingerDown { .. } => {
                input.touch_start = true;
            }
            Event::FingerUp { x, y, .. } => {
                // Finger coordinates arrive normalized to [0, 1].
                input.touch_end = Some(Vec2::new(
                    x * self.viewport.0 as f32,
                    y * self.viewport.1 as f32,
                ));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_level_triggered() {
        let mut input = InputState::new();

        input.press(GameKey::Space);
        assert!(input.jump_held());
        input.end_frame();
        assert!(input.jump_held());

        input.release(GameKey::Space);
        assert!(!input.jump_held());
    }

    #[test]
    fn jump_accepts_up_or_space() {
        let mut input = InputState::new();
        input.press(GameKey::Up);
        assert!(input.jump_held());

        input.release(GameKey::Up);
        input.press(GameKey::Space);
        assert!(input.jump_held());
        assert!(!input.duck_held());
    }

    #[test]
    fn touch_values_last_one_frame() {
        let mut input = InputState::new();
        input.touch_start = true;
        input.touch_end = Some(Vec2::new(300.0, 210.0));

        input.end_frame();

        assert!(!input.touch_start);
        assert!(input.touch_end.is_none());
    }

    #[test]
    fn pointer_persists_until_release() {
        let mut input = InputState::new();
        input.pointer_down = Some(Vec2::new(10.0, 10.0));

        input.end_frame();

        assert!(input.pointer_down.is_some());
    }

    #[test]
    fn untracked_keycodes_are_ignored() {
        assert_eq!(GameKey::from_keycode(Keycode::Up), Some(GameKey::Up));
        assert_eq!(GameKey::from_keycode(Keycode::Down), Some(GameKey::Down));
        assert_eq!(GameKey::from_keycode(Keycode::Space), Some(GameKey::Space));
        assert_eq!(GameKey::from_keycode(Keycode::A), None);
    }
}
