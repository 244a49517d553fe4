//! Orbit camera and perspective projection.
//!
//! The camera always looks at the world origin from `distance` away. Pointer
//! drags change `yaw` (around the world y axis) and `pitch` (elevation above
//! the horizon); zoom and pan are intentionally not exposed.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::TAU;

use crate::consts::{CAMERA_DISTANCE, CAMERA_FOV_DEG, CAMERA_NEAR, MAX_PITCH_DEG};
use crate::math::Vec3;

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Whether there is anything to draw into.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A projected point: screen position plus view-space depth (positive, larger is farther).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Point,
    pub depth: f64,
    /// Screen pixels per world unit at this depth.
    pub scale: f64,
}

/// Camera orbiting the origin.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub fov_y_deg: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self { yaw: 0.0, pitch: 0.0, distance: CAMERA_DISTANCE, fov_y_deg: CAMERA_FOV_DEG }
    }
}

impl OrbitCamera {
    /// World-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(self.distance * sy * cp, self.distance * sp, self.distance * cy * cp)
    }

    /// Transform a world-space point into view space (camera looks down -z).
    #[must_use]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        let v = world.rotate_y(-self.yaw).rotate_x(self.pitch);
        Vec3::new(v.x, v.y, v.z - self.distance)
    }

    /// Focal length in pixels for a viewport of the given height.
    #[must_use]
    pub fn focal_px(&self, viewport: &Viewport) -> f64 {
        (viewport.height * 0.5) / (self.fov_y_deg.to_radians() * 0.5).tan()
    }

    /// Project a world-space point to the screen. Returns `None` for points
    /// behind (or too close to) the camera.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport: &Viewport) -> Option<Projected> {
        let view = self.to_view(world);
        let depth = -view.z;
        if depth < CAMERA_NEAR {
            return None;
        }
        let scale = self.focal_px(viewport) / depth;
        Some(Projected {
            screen: Point::new(viewport.width * 0.5 + view.x * scale, viewport.height * 0.5 - view.y * scale),
            depth,
            scale,
        })
    }

    /// Rotate the orbit by a pointer movement of `dx`, `dy` screen pixels.
    ///
    /// A drag across the full viewport height turns the camera one full
    /// revolution. Pitch is clamped short of the poles.
    pub fn orbit_by(&mut self, dx: f64, dy: f64, viewport: &Viewport) {
        if viewport.height <= 0.0 {
            return;
        }
        self.yaw -= TAU * dx / viewport.height;
        let limit = MAX_PITCH_DEG.to_radians();
        self.pitch = (self.pitch + TAU * dy / viewport.height).clamp(-limit, limit);
    }
}

/// Active pointer drag: the last pointer position seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub last: Point,
}
