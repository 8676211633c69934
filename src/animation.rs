use crate::sprite::{Frame, SpriteSheet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    Running,
    Jumping,
    Ducking,
    Dead,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState::Idle
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub animations: HashMap<AnimationState, AnimationData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationData {
    pub frames: Vec<FrameData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub x: i32,
    pub y: i32,
    pub duration_ms: u64,
}

impl FrameData {
    pub fn to_frame(&self, width: u32, height: u32) -> Frame {
        Frame::new(self.x, self.y, width, height, self.duration_ms)
    }
}

/// Selects which of an entity's animations is active.
///
/// One sheet per `AnimationState`; `update` advances only the active one.
/// Switching state does not rewind the other sheets' playheads. A state
/// with no sheet configured is tolerated: no image, the draw is skipped.
pub struct AnimationController {
    current_state: AnimationState,
    sheets: HashMap<AnimationState, SpriteSheet>,
}

impl AnimationController {
    pub fn new() -> Self {
        AnimationController {
            current_state: AnimationState::default(),
            sheets: HashMap::new(),
        }
    }

    pub fn add_animation(&mut self, state: AnimationState, sheet: SpriteSheet) {
        self.sheets.insert(state, sheet);
    }

    pub fn set_state(&mut self, new_state: AnimationState) {
        self.current_state = new_state;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(sheet) = self.sheets.get_mut(&self.current_state) {
            sheet.update(dt);
        }
    }

    pub fn current_sheet(&self) -> Option<&SpriteSheet> {
        self.sheets.get(&self.current_state)
    }

    pub fn current_state(&self) -> AnimationState {
        self.current_state
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: AnimationConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn create_frames(&self, state: AnimationState) -> Vec<Frame> {
        if let Some(animation_data) = self.animations.get(&state) {
            animation_data
                .frames
                .iter()
                .map(|frame_data| frame_data.to_frame(self.frame_width, self.frame_height))
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Factory for a ready controller covering the given states.
    pub fn create_controller(&self, states: &[AnimationState]) -> AnimationController {
        let mut controller = AnimationController::new();
        for &state in states {
            controller.add_animation(state, SpriteSheet::new(self.create_frames(state)));
        }
        controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_JSON: &str = r#"{
        "frame_width": 50,
        "frame_height": 93,
        "animations": {
            "Running": {
                "frames": [
                    { "x": 50, "y": 0, "duration_ms": 200 },
                    { "x": 100, "y": 0, "duration_ms": 200 }
                ]
            },
            "Idle": {
                "frames": [ { "x": 0, "y": 0, "duration_ms": 999000 } ]
            }
        }
    }"#;

    #[test]
    fn config_parses_state_keyed_animations() {
        let config: AnimationConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        assert_eq!(config.frame_width, 50);
        assert_eq!(config.create_frames(AnimationState::Running).len(), 2);
        assert_eq!(config.create_frames(AnimationState::Idle).len(), 1);
        // No Ducking entry: empty frame list, not an error.
        assert!(config.create_frames(AnimationState::Ducking).is_empty());
    }

    #[test]
    fn frame_data_converts_milliseconds() {
        let config: AnimationConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        let frames = config.create_frames(AnimationState::Running);
        assert!((frames[0].duration - 0.2).abs() < f32::EPSILON);
        assert_eq!(frames[1].x, 100);
        assert_eq!(frames[0].height, 93);
    }

    #[test]
    fn shipped_configs_parse() {
        AnimationConfig::load_from_file("config/player_animations.json").unwrap();
        AnimationConfig::load_from_file("config/enemy_animations.json").unwrap();
    }

    #[test]
    fn controller_only_advances_active_state() {
        let config: AnimationConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        let mut controller =
            config.create_controller(&[AnimationState::Idle, AnimationState::Running]);

        controller.set_state(AnimationState::Running);
        controller.update(0.2);
        assert_eq!(controller.current_sheet().unwrap().frame_index(), 1);

        // Switching away and back keeps the running sheet's playhead.
        controller.set_state(AnimationState::Idle);
        controller.update(0.1);
        controller.set_state(AnimationState::Running);
        assert_eq!(controller.current_sheet().unwrap().frame_index(), 1);
    }

    #[test]
    fn controller_tolerates_missing_state() {
        let mut controller = AnimationController::new();
        controller.set_state(AnimationState::Dead);
        controller.update(1.0);
        assert!(controller.current_sheet().is_none());
    }
}
