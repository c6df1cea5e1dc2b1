//! Bounce Rects entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use bounce_rects::Settings;
    use bounce_rects::platform::{event_point, find_canvas};
    use bounce_rects::renderer::{CanvasSurface, draw_frame};
    use bounce_rects::sim::{Scene, tick};

    /// Demo instance holding all state
    struct Demo {
        scene: Scene,
        surface: CanvasSurface,
        settings: Settings,
    }

    impl Demo {
        fn new(settings: Settings, surface: CanvasSurface) -> Self {
            Self {
                scene: Scene::new(&settings),
                surface,
                settings,
            }
        }

        /// Advance one tick and draw it
        fn frame(&mut self) {
            let frame = tick(&mut self.scene);
            if frame.spawned {
                log::debug!("{} ripples live", self.scene.ripples.len());
            }
            draw_frame(&mut self.surface, &frame, &self.settings.palette);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        // Logger first so settings warnings reach the console
        if let Err(e) = console_log::init_with_level(log::Level::Trace) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }
        let settings = Settings::load();
        log::set_max_level(settings.log_filter());

        log::info!("Bounce Rects starting...");

        let canvas = find_canvas("rect-canvas")?;
        let surface = CanvasSurface::new(canvas.clone())?;
        let demo = Rc::new(RefCell::new(Demo::new(settings, surface)));

        log::info!("Canvas {}x{}", canvas.width(), canvas.height());

        setup_input_handlers(&canvas, demo.clone());

        // Start frame loop
        request_animation_frame(demo)?;

        log::info!("Bounce Rects running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, demo: Rc<RefCell<Demo>>) {
        // Keep drags from starting a text selection
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("selectstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - grab a rectangle
        {
            let demo = demo.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = event_point(&canvas_clone, &event);
                demo.borrow_mut().scene.press(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - retarget the grabbed rectangle
        {
            let demo = demo.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = event_point(&canvas_clone, &event);
                demo.borrow_mut().scene.drag_to(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - let go
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                demo.borrow_mut().scene.release();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |_time: f64| {
            frame_loop(demo);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>) {
        demo.borrow_mut().frame();

        if let Err(e) = request_animation_frame(demo) {
            log::error!("Frame loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_demo::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Rects (native) starting...");
    log::info!("Native mode has no window - serve the wasm build for the interactive demo");

    println!("\nRunning scripted drag session...");
    scripted_drag_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drag A into B, out again, and back, reporting each ripple
#[cfg(not(target_arch = "wasm32"))]
fn scripted_drag_session() {
    use bounce_rects::Settings;
    use bounce_rects::sim::{Scene, tick};
    use glam::Vec2;

    let settings = Settings::load();
    let mut scene = Scene::new(&settings);

    let steps = [
        ("grab A", Vec2::new(35.0, 35.0)),
        ("into B", Vec2::new(140.0, 200.0)),
        ("out of B", Vec2::new(400.0, 30.0)),
        ("into B again", Vec2::new(140.0, 200.0)),
    ];

    let mut ripples = 0;
    for (i, (label, point)) in steps.iter().enumerate() {
        if i == 0 {
            scene.press(*point);
        } else {
            scene.drag_to(*point);
        }
        for _ in 0..40 {
            let frame = tick(&mut scene);
            if let (true, Some(area)) = (frame.spawned, frame.overlap) {
                ripples += 1;
                let c = area.center();
                println!("  ripple #{} at ({:.1}, {:.1}) during '{}'", ripples, c.x, c.y, label);
            }
        }
    }
    scene.release();

    assert_eq!(ripples, 2, "expected one ripple per overlap");
    println!("✓ Scripted drag session produced {} ripples", ripples);
}
