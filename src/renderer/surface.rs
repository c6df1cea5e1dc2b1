//! Drawing surface abstraction and frame drawing
//!
//! The renderer only needs three primitives from the host: clear, fill a
//! rectangle, and fill a circle. Coordinates are surface-local pixels with
//! the origin at the top-left.

use glam::Vec2;

use super::color::{Color, Palette};
use crate::sim::{Frame, Rect};

/// A 2D surface that can be filled with solid shapes
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (f32, f32);

    /// Clear the region from the origin to `(width, height)`
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, rect: &Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Draw one frame: clear, rectangles, overlap on top, then ripples
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, frame: &Frame, palette: &Palette) {
    let (width, height) = surface.size();
    surface.clear(width, height);

    for rect in &frame.rects {
        surface.fill_rect(rect, palette.rect);
    }

    if let Some(overlap) = &frame.overlap {
        surface.fill_rect(overlap, palette.overlap);
    }

    for ripple in &frame.ripples {
        surface.fill_circle(
            ripple.center,
            ripple.radius,
            palette.ripple.with_alpha(ripple.alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{Scene, tick};

    /// A draw call captured by `RecordingSurface`
    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(f32, f32),
        Rect(Rect, Color),
        Circle(Vec2, f32, Color),
    }

    /// Surface that records draw calls in order
    struct RecordingSurface {
        width: f32,
        height: f32,
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn clear(&mut self, width: f32, height: f32) {
            self.calls.push(DrawCall::Clear(width, height));
        }

        fn fill_rect(&mut self, rect: &Rect, color: Color) {
            self.calls.push(DrawCall::Rect(*rect, color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(DrawCall::Circle(center, radius, color));
        }
    }

    #[test]
    fn test_draw_order_without_overlap() {
        let mut scene = Scene::new(&Settings::default());
        let frame = tick(&mut scene);
        let mut surface = RecordingSurface::new(640.0, 480.0);
        draw_frame(&mut surface, &frame, &Palette::default());

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear(640.0, 480.0),
                DrawCall::Rect(Rect::new(10.0, 10.0, 50.0, 50.0), Color::RED),
                DrawCall::Rect(Rect::new(60.0, 100.0, 160.0, 220.0), Color::RED),
            ]
        );
    }

    #[test]
    fn test_overlap_and_ripple_drawn_last() {
        let settings = Settings {
            rect_a: Rect::new(0.0, 0.0, 15.0, 15.0),
            rect_b: Rect::new(5.0, 5.0, 20.0, 20.0),
            ..Default::default()
        };
        let mut scene = Scene::new(&settings);
        let frame = tick(&mut scene);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        draw_frame(&mut surface, &frame, &settings.palette);

        assert_eq!(surface.calls.len(), 5);
        assert!(matches!(surface.calls[0], DrawCall::Clear(..)));
        assert_eq!(
            surface.calls[3],
            DrawCall::Rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::GREEN)
        );
        match &surface.calls[4] {
            DrawCall::Circle(center, radius, color) => {
                assert_eq!(*center, Vec2::new(10.0, 10.0));
                assert_eq!(*radius, 42.0);
                assert!((color.a - 0.37).abs() < 1e-5);
            }
            other => panic!("expected ripple, got {:?}", other),
        }
    }

    #[test]
    fn test_expiring_ripple_drawn_transparent() {
        let settings = Settings {
            rect_a: Rect::new(0.0, 0.0, 15.0, 15.0),
            rect_b: Rect::new(5.0, 5.0, 20.0, 20.0),
            ..Default::default()
        };
        let mut scene = Scene::new(&settings);
        for _ in 0..13 {
            tick(&mut scene);
        }
        let frame = tick(&mut scene);
        assert!(scene.ripples.is_empty());

        let mut surface = RecordingSurface::new(100.0, 100.0);
        draw_frame(&mut surface, &frame, &settings.palette);
        match surface.calls.last() {
            Some(DrawCall::Circle(_, _, color)) => assert_eq!(color.a, 0.0),
            other => panic!("expected ripple, got {:?}", other),
        }
    }
}
