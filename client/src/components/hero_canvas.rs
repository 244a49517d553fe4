//! Bridge component between Leptos and the imperative `scene::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The `scene` crate owns geometry, animation, and drawing. This host creates
//! the engine once the `<canvas>` mounts, drives it from a
//! `requestAnimationFrame` loop, forwards pointer drags for orbiting, and stops
//! the loop when the component is torn down.
//!
//! TRADE-OFFS
//! ==========
//! The scene is decorative: a missing 2D context or a failed draw is logged
//! and the hero simply renders without animation. Outside `hydrate` only the
//! empty canvas element is rendered.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use scene::camera::Point;
#[cfg(feature = "hydrate")]
use scene::engine::Engine;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Particle placement seed. Fixed so the hero looks the same on every visit.
#[cfg(feature = "hydrate")]
const SCENE_SEED: u64 = 0x5eed_cafe;

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, canvas: &web_sys::HtmlCanvasElement) {
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    let vp = engine.core.viewport;
    #[allow(clippy::float_cmp)]
    let unchanged = vp.width == width && vp.height == height && vp.dpr == dpr.max(1.0);
    if !unchanged {
        engine.set_viewport(width, height, dpr);
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Start the animation loop. It runs until `alive` is cleared, then drops its
/// own closure so the engine is released.
#[cfg(feature = "hydrate")]
fn start_loop(engine: SharedEngine, canvas: web_sys::HtmlCanvasElement, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut started_at: Option<f64> = None;

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            engine.borrow_mut().take();
            holder_for_cb.borrow_mut().take();
            return;
        }

        let start = *started_at.get_or_insert(ts);
        if let Some(engine) = engine.borrow_mut().as_mut() {
            sync_viewport(engine, &canvas);
            engine.tick((ts - start) / 1000.0);
            if let Err(err) = engine.render() {
                log::warn!("hero scene render failed: {err:?}");
            }
        }

        let next = holder_for_cb
            .borrow()
            .as_ref()
            .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
        if let Some(Err(err)) = next {
            log::warn!("hero scene stopped: {err:?}");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(err) => log::warn!("hero scene could not start: {err:?}"),
    }
}

/// Full-bleed canvas showing the animated hero scene.
#[component]
pub fn HeroCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_loop = Arc::clone(&alive);
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            match Engine::new(canvas.clone(), SCENE_SEED) {
                Ok(mut instance) => {
                    sync_viewport(&mut instance, &canvas);
                    *engine.borrow_mut() = Some(instance);
                    start_loop(Rc::clone(&engine), canvas, Arc::clone(&alive_loop));
                }
                Err(err) => log::warn!("hero scene unavailable: {err:?}"),
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture refused: {err:?}");
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_down(pointer_point(&ev));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    if engine.on_pointer_move(pointer_point(&ev)) {
                        ev.prevent_default();
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };
    let on_pointer_leave = on_pointer_up.clone();

    view! {
        <canvas
            class="hero-canvas"
            node_ref=canvas_ref
            aria-hidden="true"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        ></canvas>
    }
}
