//! Rendering: draws one frame of the hero scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads scene and camera state and produces pixels; it never mutates
//! either.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{OrbitCamera, Viewport};
use crate::mesh::{Face, box_faces, particle_points, sphere_lines};
use crate::shapes::{HeroScene, Rgb};

/// Smallest on-screen particle radius in CSS pixels.
const MIN_PARTICLE_RADIUS_PX: f64 = 0.75;

/// Wire sphere line width in CSS pixels.
const WIRE_LINE_WIDTH_PX: f64 = 1.0;

/// Draw the full scene: particles, then the wire sphere, then box faces back to front.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &HeroScene,
    camera: &OrbitCamera,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    if viewport.is_empty() {
        return Ok(());
    }

    draw_particles(ctx, scene, camera, viewport)?;
    draw_sphere(ctx, scene, camera, viewport);
    draw_boxes(ctx, scene, camera, viewport);
    Ok(())
}

fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    scene: &HeroScene,
    camera: &OrbitCamera,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    let field = &scene.particles;
    ctx.set_fill_style_str(&field.color.css(1.0, field.opacity));
    for p in particle_points(field) {
        let Some(proj) = camera.project(p, viewport) else {
            continue;
        };
        let radius = (field.size * 0.5 * proj.scale).max(MIN_PARTICLE_RADIUS_PX);
        ctx.begin_path();
        ctx.arc(proj.screen.x, proj.screen.y, radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_sphere(ctx: &CanvasRenderingContext2d, scene: &HeroScene, camera: &OrbitCamera, viewport: &Viewport) {
    let sphere = &scene.sphere;
    ctx.set_stroke_style_str(&sphere.color.css(1.0, sphere.opacity));
    ctx.set_line_width(WIRE_LINE_WIDTH_PX);
    ctx.begin_path();
    for line in sphere_lines(sphere) {
        let mut pen_down = false;
        for p in line {
            match camera.project(p, viewport) {
                Some(proj) if pen_down => ctx.line_to(proj.screen.x, proj.screen.y),
                Some(proj) => {
                    ctx.move_to(proj.screen.x, proj.screen.y);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
    }
    ctx.stroke();
}

fn draw_boxes(ctx: &CanvasRenderingContext2d, scene: &HeroScene, camera: &OrbitCamera, viewport: &Viewport) {
    let eye = camera.position();
    let mut visible: Vec<(f64, Face, Rgb, f64)> = Vec::new();
    for b in &scene.boxes {
        for face in box_faces(b) {
            let center = face.center();
            if face.normal.dot(eye - center) <= 0.0 {
                continue;
            }
            let depth = (eye - center).length();
            visible.push((depth, face, b.color, b.opacity));
        }
    }
    visible.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, face, color, opacity) in visible {
        let projected: Option<Vec<_>> = face.corners.iter().map(|&c| camera.project(c, viewport)).collect();
        let Some(points) = projected else {
            continue;
        };
        ctx.set_fill_style_str(&color.css(face.shade, opacity));
        ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(p.screen.x, p.screen.y);
            } else {
                ctx.line_to(p.screen.x, p.screen.y);
            }
        }
        ctx.close_path();
        ctx.fill();
    }
}
