//! Scene simulation
//!
//! All per-frame logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per display refresh, unit time step
//! - Input only through `Scene::press` / `drag_to` / `release`
//! - `tick` returns a `Frame` for the renderer instead of drawing

pub mod bounce;
pub mod drag;
pub mod rect;
pub mod ripple;
pub mod state;
pub mod tick;

pub use bounce::{BounceRect, BounceTuning, bounce_factor};
pub use drag::{DragState, RectId};
pub use rect::Rect;
pub use ripple::{Ripple, RippleTuning, advance_ripples};
pub use state::{Contact, Scene};
pub use tick::{Frame, tick};
