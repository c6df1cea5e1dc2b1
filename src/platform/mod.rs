//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Viewport to surface-local coordinates
//! - Canvas lookup and mouse event positions (WASM only)

use glam::Vec2;

/// Convert a viewport point to surface-local pixels
///
/// Subtracts the surface's top-left viewport offset and floors to whole
/// pixels.
#[inline]
pub fn surface_point(viewport: Vec2, surface_origin: Vec2) -> Vec2 {
    (viewport - surface_origin).floor()
}

#[cfg(target_arch = "wasm32")]
mod web {
    use glam::Vec2;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use super::surface_point;

    /// Find the demo canvas by element id
    pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)))
    }

    /// Mouse event position in canvas-local pixels
    pub fn event_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let bounds = canvas.get_bounding_client_rect();
        surface_point(
            Vec2::new(event.client_x() as f32, event.client_y() as f32),
            Vec2::new(bounds.left() as f32, bounds.top() as f32),
        )
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{event_point, find_canvas};
