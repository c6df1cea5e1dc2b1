//! Bounce Rects - two draggable rectangles that ripple when they overlap
//!
//! Core modules:
//! - `sim`: Per-frame scene update (geometry, bounce, drag easing, ripples)
//! - `renderer`: Drawing surface abstraction and frame drawing
//! - `platform`: Browser coordinate helpers and the Canvas 2D surface
//! - `settings`: Data-driven demo tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Ticks of bounce animation started when a rectangle is grabbed
    pub const BOUNCE_TICKS: u32 = 27;
    /// Bounce amplitude per remaining tick
    pub const BOUNCE_SCALE: f32 = 0.15;

    /// Ripple defaults
    pub const RIPPLE_START_RADIUS: f32 = 40.0;
    pub const RIPPLE_START_ALPHA: f32 = 0.4;
    /// Radius gained per tick
    pub const RIPPLE_GROWTH: f32 = 2.0;
    /// Alpha lost per tick
    pub const RIPPLE_FADE: f32 = 0.03;

    /// Starting geometry of the two rectangles (x, y, width, height)
    pub const RECT_A: [f32; 4] = [10.0, 10.0, 50.0, 50.0];
    pub const RECT_B: [f32; 4] = [60.0, 100.0, 160.0, 220.0];
}
