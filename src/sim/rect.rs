//! Axis-aligned rectangle geometry for bounding boxes and the play area

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle from `(x1, y1)` (top-left) to `(x2, y2)` (bottom-right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    /// Panics if the rectangle is empty or inverted.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            x1 < x2 && y1 < y2,
            "malformed rect ({x1}, {y1}) -> ({x2}, {y2})"
        );
        Self { x1, y1, x2, y2 }
    }

    /// Square of side `size` anchored at its top-left corner
    #[inline]
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, pos.x + size, pos.y + size)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }

    /// Half-open containment: `[x1, x2) × [y1, y2)`
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x1 && p.x < self.x2 && p.y >= self.y1 && p.y < self.y2
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}
