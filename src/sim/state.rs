//! Scene state and input handling
//!
//! Everything that changes between frames lives in `Scene`. Input handlers
//! and the frame tick are its only writers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounce::{BounceRect, BounceTuning};
use super::drag::{DragState, RectId, center_target, hit_test};
use super::rect::Rect;
use super::ripple::{Ripple, RippleTuning};
use crate::settings::Settings;

/// Whether the bounced rectangles overlapped on the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Contact {
    #[default]
    Apart,
    Touching,
}

/// Complete scene state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// The two draggable rectangles, indexed by `RectId`
    pub rects: [BounceRect; 2],
    /// Live ripples, oldest first
    pub ripples: Vec<Ripple>,
    pub contact: Contact,
    pub drag: DragState,
    pub bounce: BounceTuning,
    pub ripple: RippleTuning,
    /// Frames ticked so far
    pub time_ticks: u64,
}

impl Scene {
    /// Create a scene from the configured starting rectangles and tuning
    pub fn new(settings: &Settings) -> Self {
        Self {
            rects: [
                BounceRect::new(settings.rect_a),
                BounceRect::new(settings.rect_b),
            ],
            ripples: Vec::new(),
            contact: Contact::Apart,
            drag: DragState::Idle,
            bounce: settings.bounce,
            ripple: settings.ripple,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn rect(&self, id: RectId) -> &BounceRect {
        &self.rects[id.index()]
    }

    #[inline]
    pub fn rect_mut(&mut self, id: RectId) -> &mut BounceRect {
        &mut self.rects[id.index()]
    }

    /// Mouse press at a surface-local point
    ///
    /// Grabs the rectangle under the point (A wins ties) and restarts its
    /// bounce. A press that misses keeps any current grab. Either way the
    /// target is recomputed right away, so the first tick already eases.
    pub fn press(&mut self, point: Vec2) {
        if let Some(which) = hit_test(&self.rects, point) {
            let bounce = self.bounce;
            self.rect_mut(which).start_bounce(&bounce);
            let target = center_target(point, self.rect(which));
            self.drag = DragState::Dragging { which, target };
            log::debug!("Grabbed rect {:?} at ({}, {})", which, point.x, point.y);
        }
        self.drag_to(point);
    }

    /// Mouse move at a surface-local point; retargets the grabbed rectangle
    pub fn drag_to(&mut self, point: Vec2) {
        if let DragState::Dragging { which, .. } = self.drag {
            let target = center_target(point, self.rect(which));
            self.drag = DragState::Dragging { which, target };
        }
    }

    /// Mouse release; always drops the grab
    pub fn release(&mut self) {
        if let Some(which) = self.drag.grabbed() {
            log::debug!("Released rect {:?}", which);
        }
        self.drag = DragState::Idle;
    }

    /// Current true geometry of both rectangles
    pub fn true_rects(&self) -> [Rect; 2] {
        [self.rects[0].rect, self.rects[1].rect]
    }
}
