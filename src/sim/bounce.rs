//! Grab bounce animation
//!
//! A grabbed rectangle wobbles for a fixed number of ticks. The wobble only
//! changes the rectangle that is drawn and overlap-tested; the stored
//! geometry is never touched.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BOUNCE_SCALE, BOUNCE_TICKS};

/// Bounce tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceTuning {
    /// Countdown set when a rectangle is grabbed
    pub grab_ticks: u32,
    /// Inflation per remaining tick
    pub scale: f32,
}

impl Default for BounceTuning {
    fn default() -> Self {
        Self {
            grab_ticks: BOUNCE_TICKS,
            scale: BOUNCE_SCALE,
        }
    }
}

/// Inflation for a given countdown: `(sin(t) + 1) * t * scale`
///
/// Zero at `t == 0`, otherwise an oscillation whose envelope shrinks
/// linearly with the countdown.
#[inline]
pub fn bounce_factor(countdown: u32, scale: f32) -> f32 {
    let t = countdown as f32;
    (t.sin() + 1.0) * t * scale
}

/// One of the two draggable rectangles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceRect {
    /// True geometry (drag easing moves this)
    pub rect: Rect,
    /// Remaining bounce ticks
    pub bounce_ticks: u32,
}

impl BounceRect {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            bounce_ticks: 0,
        }
    }

    /// Restart the bounce animation
    pub fn start_bounce(&mut self, tuning: &BounceTuning) {
        self.bounce_ticks = tuning.grab_ticks;
    }

    /// Visual rectangle for this tick, counting the bounce down by one
    ///
    /// Must be called exactly once per tick, including when the countdown
    /// is already zero.
    pub fn bounced(&mut self, tuning: &BounceTuning) -> Rect {
        let factor = bounce_factor(self.bounce_ticks, tuning.scale);
        self.bounce_ticks = self.bounce_ticks.saturating_sub(1);
        self.rect.inflate(factor)
    }
}
