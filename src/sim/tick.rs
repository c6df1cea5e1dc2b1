//! Per-frame scene update
//!
//! One call per display refresh. Every call is treated as a unit time step,
//! whatever the actual elapsed time was.

use super::drag::{DragState, ease_toward};
use super::rect::Rect;
use super::ripple::{Ripple, advance_ripples};
use super::state::{Contact, Scene};

/// What to draw for one tick, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Bounced rectangles A and B
    pub rects: [Rect; 2],
    /// Overlap of the bounced rectangles, drawn on top of them
    pub overlap: Option<Rect>,
    /// Ripples after this tick's growth, in draw order (newest first).
    /// Includes ripples that expired this tick.
    pub ripples: Vec<Ripple>,
    /// A ripple was spawned this tick
    pub spawned: bool,
}

/// Advance the scene by one frame and return what to draw
pub fn tick(scene: &mut Scene) -> Frame {
    scene.time_ticks += 1;

    // Ease the grabbed rectangle toward its target
    if let DragState::Dragging { which, target } = scene.drag {
        let rect = &mut scene.rect_mut(which).rect;
        let pos = ease_toward(rect.origin(), target);
        rect.x = pos.x;
        rect.y = pos.y;
    }

    // Bounce both, always, so both countdowns advance
    let bounce = scene.bounce;
    let rects = [
        scene.rects[0].bounced(&bounce),
        scene.rects[1].bounced(&bounce),
    ];

    // Overlap uses the bounced rectangles, not the true ones
    let overlap = rects[0].intersect(&rects[1]);
    let mut spawned = false;
    match (overlap, scene.contact) {
        (Some(area), Contact::Apart) => {
            let ripple = Ripple::spawn(area.center(), &scene.ripple);
            log::debug!(
                "Overlap began at tick {}, ripple at ({}, {})",
                scene.time_ticks,
                ripple.center.x,
                ripple.center.y
            );
            scene.ripples.push(ripple);
            scene.contact = Contact::Touching;
            spawned = true;
        }
        (Some(_), Contact::Touching) => {}
        (None, _) => scene.contact = Contact::Apart,
    }

    let mut drawn = Vec::with_capacity(scene.ripples.len());
    let tuning = scene.ripple;
    advance_ripples(&mut scene.ripples, &tuning, |r| drawn.push(*r));
    log::trace!("{} live ripples", scene.ripples.len());

    Frame {
        rects,
        overlap,
        ripples: drawn,
        spawned,
    }
}
