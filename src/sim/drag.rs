//! Drag controller
//!
//! Press on a rectangle to grab it, move to retarget, release to let go.
//! While grabbed the rectangle eases toward the target, halving the
//! remaining distance every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounce::BounceRect;

/// Which of the two rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectId {
    A,
    B,
}

impl RectId {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RectId::A => 0,
            RectId::B => 1,
        }
    }
}

/// Drag state machine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Nothing grabbed
    #[default]
    Idle,
    /// A rectangle is grabbed and easing toward `target` (its top-left goal)
    Dragging { which: RectId, target: Vec2 },
}

impl DragState {
    pub fn grabbed(&self) -> Option<RectId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { which, .. } => Some(*which),
        }
    }
}

/// Top-left goal that puts the rectangle's center on `point`
#[inline]
pub fn center_target(point: Vec2, rect: &BounceRect) -> Vec2 {
    point - rect.rect.size() / 2.0
}

/// Move `pos` half way toward `target`
///
/// Converges geometrically; in `f32` the position rounds onto the target
/// after a couple dozen ticks.
#[inline]
pub fn ease_toward(pos: Vec2, target: Vec2) -> Vec2 {
    pos + (target - pos) / 2.0
}

/// Pick the rectangle under `point`, testing A before B
pub fn hit_test(rects: &[BounceRect; 2], point: Vec2) -> Option<RectId> {
    if rects[RectId::A.index()].rect.contains_point(point) {
        Some(RectId::A)
    } else if rects[RectId::B.index()].rect.contains_point(point) {
        Some(RectId::B)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;

    #[test]
    fn test_ease_halves_distance() {
        let mut pos = Vec2::ZERO;
        let target = Vec2::new(100.0, 0.0);

        pos = ease_toward(pos, target);
        assert_eq!(pos.x, 50.0);
        pos = ease_toward(pos, target);
        assert_eq!(pos.x, 75.0);

        for _ in 0..10 {
            pos = ease_toward(pos, target);
            assert!(pos.x < 100.0);
        }
    }

    #[test]
    fn test_ease_settles_on_target_in_f32() {
        let target = Vec2::new(100.0, 0.0);
        let mut pos = Vec2::ZERO;
        for _ in 0..40 {
            pos = ease_toward(pos, target);
        }
        assert_eq!(pos, target);
    }

    #[test]
    fn test_center_target() {
        let r = BounceRect::new(Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(center_target(Vec2::new(100.0, 100.0), &r), Vec2::new(75.0, 90.0));
    }

    #[test]
    fn test_hit_test_prefers_a() {
        let rects = [
            BounceRect::new(Rect::new(0.0, 0.0, 50.0, 50.0)),
            BounceRect::new(Rect::new(25.0, 25.0, 50.0, 50.0)),
        ];
        assert_eq!(hit_test(&rects, Vec2::new(30.0, 30.0)), Some(RectId::A));
        assert_eq!(hit_test(&rects, Vec2::new(60.0, 60.0)), Some(RectId::B));
        assert_eq!(hit_test(&rects, Vec2::new(200.0, 200.0)), None);
        // Exactly on A's right edge, inside B
        assert_eq!(hit_test(&rects, Vec2::new(50.0, 30.0)), Some(RectId::B));
    }
}
