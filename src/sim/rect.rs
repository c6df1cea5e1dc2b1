//! Axis-aligned rectangle geometry
//!
//! Surface-local coordinates, origin at the top-left, y grows downward.
//! Overlap and hit tests are strict: shared edges and boundary points do
//! not count, so zero-area rectangles never intersect or contain anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from an `[x, y, width, height]` array
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Centroid of the rectangle
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() / 2.0
    }

    /// Grow (or shrink, for negative `amount`) by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Overlapping region of two rectangles, if it has positive area
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let left = self.x.max(other.x);

        let width = right - left;
        let height = bottom - top;

        if width > 0.0 && height > 0.0 {
            Some(Rect::new(left, top, width, height))
        } else {
            None
        }
    }

    /// Check if a point lies strictly inside the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }
}
