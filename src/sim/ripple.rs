//! Ripples: expanding, fading circles spawned where the rectangles meet

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{RIPPLE_FADE, RIPPLE_GROWTH, RIPPLE_START_ALPHA, RIPPLE_START_RADIUS};

/// Ripple tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RippleTuning {
    pub start_radius: f32,
    pub start_alpha: f32,
    /// Radius gained per tick
    pub growth: f32,
    /// Alpha lost per tick
    pub fade: f32,
}

impl Default for RippleTuning {
    fn default() -> Self {
        Self {
            start_radius: RIPPLE_START_RADIUS,
            start_alpha: RIPPLE_START_ALPHA,
            growth: RIPPLE_GROWTH,
            fade: RIPPLE_FADE,
        }
    }
}

/// A single ripple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    pub center: Vec2,
    pub radius: f32,
    /// May dip below zero on the tick it expires
    pub alpha: f32,
}

impl Ripple {
    /// New ripple at `center`; radius and alpha always start from the tuning
    pub fn spawn(center: Vec2, tuning: &RippleTuning) -> Self {
        Self {
            center,
            radius: tuning.start_radius,
            alpha: tuning.start_alpha,
        }
    }

    /// Grow and fade by one tick
    pub fn advance(&mut self, tuning: &RippleTuning) {
        self.radius += tuning.growth;
        self.alpha -= tuning.fade;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.alpha < 0.0
    }
}

/// Advance every live ripple by one tick and drop the expired ones
///
/// Ripples are visited from the last to the first, and `visit` sees each
/// one after it has advanced but before it is removed, so a ripple is drawn
/// on the tick it expires.
pub fn advance_ripples(
    ripples: &mut Vec<Ripple>,
    tuning: &RippleTuning,
    mut visit: impl FnMut(&Ripple),
) {
    for i in (0..ripples.len()).rev() {
        ripples[i].advance(tuning);
        visit(&ripples[i]);
        if ripples[i].is_expired() {
            ripples.remove(i);
        }
    }
}
