use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// How long this frame stays on screen, in seconds.
    pub duration: f32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32, duration_ms: u64) -> Self {
        Frame {
            x,
            y,
            width,
            height,
            duration: duration_ms as f32 / 1000.0,
        }
    }
}

/// Delta-time driven playback over a sequence of sprite-sheet frames.
///
/// Playback state carries no texture; the texture is supplied at draw time,
/// so simulation code (and tests) never touch SDL resources.
///
/// Invariants: `current_frame` always indexes into `frames`, and
/// `time_in_frame` stays below the current frame's duration.
pub struct SpriteSheet {
    frames: Vec<Frame>,
    current_frame: usize,
    time_in_frame: f32,
}

impl SpriteSheet {
    pub fn new(frames: Vec<Frame>) -> Self {
        SpriteSheet {
            frames,
            current_frame: 0,
            time_in_frame: 0.0,
        }
    }

    /// Advance playback by `dt` seconds. An empty frame list is tolerated
    /// (no-op); once the active frame's duration is reached the playhead
    /// wraps cyclically.
    pub fn update(&mut self, dt: f32) {
        if self.frames.is_empty() {
            return;
        }

        self.time_in_frame += dt;
        if self.time_in_frame >= self.frames[self.current_frame].duration {
            self.time_in_frame = 0.0;
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.time_in_frame = 0.0;
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.current_frame)
    }

    pub fn frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        texture: &Texture,
        dest_rect: Rect,
    ) -> Result<(), String> {
        let Some(frame) = self.current_frame() else {
            return Ok(());
        };

        let src_rect = Rect::new(frame.x, frame.y, frame.width, frame.height);
        canvas
            .copy(texture, Some(src_rect), Some(dest_rect))
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_frame_sheet() -> SpriteSheet {
        SpriteSheet::new(vec![
            Frame::new(0, 0, 50, 93, 200),
            Frame::new(50, 0, 50, 93, 200),
        ])
    }

    #[test]
    fn empty_sheet_update_is_noop() {
        let mut sheet = SpriteSheet::new(Vec::new());
        sheet.update(10.0);
        assert_eq!(sheet.frame_index(), 0);
        assert!(sheet.current_frame().is_none());
    }

    #[test]
    fn advances_when_frame_duration_reached() {
        let mut sheet = two_frame_sheet();
        sheet.update(0.19);
        assert_eq!(sheet.frame_index(), 0);
        sheet.update(0.01);
        assert_eq!(sheet.frame_index(), 1);
    }

    #[test]
    fn batched_updates_match_single_update() {
        // Many small steps summing to one frame duration land on the same
        // frame as a single step of that duration.
        let mut stepped = two_frame_sheet();
        for _ in 0..4 {
            stepped.update(0.05);
        }

        let mut single = two_frame_sheet();
        single.update(0.2);

        assert_eq!(stepped.frame_index(), single.frame_index());
    }

    #[test]
    fn full_cycle_returns_to_first_frame() {
        let mut sheet = two_frame_sheet();
        sheet.update(0.2);
        sheet.update(0.2);
        assert_eq!(sheet.frame_index(), 0);
    }

    #[test]
    fn reset_rewinds_playhead() {
        let mut sheet = two_frame_sheet();
        sheet.update(0.2);
        sheet.update(0.1);
        sheet.reset();
        assert_eq!(sheet.frame_index(), 0);
        sheet.update(0.19);
        assert_eq!(sheet.frame_index(), 0);
    }
}
