//! Rendering module
//!
//! Draws a `sim::Frame` onto any `Surface`; Canvas 2D in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::{Color, Palette};
pub use surface::{Surface, draw_frame};
