use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{DragAnchor, OrbitCamera, Point, Viewport};
use crate::consts::MAX_FRAME_STEP_S;
use crate::render;
use crate::shapes::HeroScene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct SceneCore {
    pub scene: HeroScene,
    pub camera: OrbitCamera,
    pub viewport: Viewport,
    pub drag: Option<DragAnchor>,
    last_elapsed: Option<f64>,
}

impl SceneCore {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            scene: HeroScene::new(seed),
            camera: OrbitCamera::default(),
            viewport: Viewport::default(),
            drag: None,
            last_elapsed: None,
        }
    }

    // --- Time ---

    /// Advance the animation to `elapsed` seconds since the loop started.
    ///
    /// The first call only records the timestamp. Steps are clamped to
    /// `MAX_FRAME_STEP_S` and a clock that runs backwards is treated as no
    /// movement.
    pub fn tick(&mut self, elapsed: f64) {
        let step = match self.last_elapsed {
            Some(prev) => (elapsed - prev).clamp(0.0, MAX_FRAME_STEP_S),
            None => 0.0,
        };
        self.last_elapsed = Some(elapsed);
        self.scene.advance_by(step, elapsed);
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport = Viewport { width: width_css.max(0.0), height: height_css.max(0.0), dpr: dpr.max(1.0) };
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        self.drag = Some(DragAnchor { last: screen_pt });
    }

    /// Orbit the camera while a drag is active. Returns whether the camera moved.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let dx = screen_pt.x - anchor.last.x;
        let dy = screen_pt.y - anchor.last.y;
        self.camera.orbit_by(dx, dy, &self.viewport);
        self.drag = Some(DragAnchor { last: screen_pt });
        dx != 0.0 || dy != 0.0
    }

    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// The full scene engine. Wraps `SceneCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;
        Ok(Self { canvas, ctx, core: SceneCore::new(seed) })
    }

    // --- Viewport ---

    /// Resize the backing store to match CSS size times device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let vp = self.core.viewport;
        self.canvas.set_width(backing_px(vp.width, vp.dpr));
        self.canvas.set_height(backing_px(vp.height, vp.dpr));
    }

    // --- Delegated inputs ---

    pub fn tick(&mut self, elapsed: f64) {
        self.core.tick(elapsed);
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        self.core.on_pointer_down(screen_pt);
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> bool {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Propagates any `Canvas2D` failure from [`render::draw`].
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.scene, &self.core.camera, &self.core.viewport)
    }
}

/// Backing-store size in device pixels for a CSS length.
#[must_use]
pub fn backing_px(css: f64, dpr: f64) -> u32 {
    let px = (css * dpr).round();
    if px <= 0.0 {
        0
    } else if px >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = px as u32;
        px
    }
}
