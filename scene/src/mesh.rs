//! World-space geometry for the renderer.
//!
//! Turns animated scene objects into flat lists of quads, polylines and
//! points. Kept separate from [`crate::render`] so it can be checked without
//! a canvas.

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

use std::f64::consts::{PI, TAU};

use crate::consts::{AMBIENT_INTENSITY, POINT_LIGHT};
use crate::math::{Transform, Vec3};
use crate::shapes::{FloatingBox, ParticleField, WireSphere};

/// Unit cube corners, indexed by the bit pattern `xyz` (0 = -0.5, 1 = +0.5).
const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Cube faces as corner indices (counter-clockwise seen from outside) with outward normals.
const CUBE_FACES: [([usize; 4], Vec3); 6] = [
    ([4, 6, 7, 5], Vec3::new(1.0, 0.0, 0.0)),
    ([0, 1, 3, 2], Vec3::new(-1.0, 0.0, 0.0)),
    ([2, 3, 7, 6], Vec3::new(0.0, 1.0, 0.0)),
    ([0, 4, 5, 1], Vec3::new(0.0, -1.0, 0.0)),
    ([1, 5, 7, 3], Vec3::new(0.0, 0.0, 1.0)),
    ([0, 2, 6, 4], Vec3::new(0.0, 0.0, -1.0)),
];

/// One shaded face of a box in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    /// Light factor in `0..=1` to multiply the base colour by.
    pub shade: f64,
}

impl Face {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        let sum = self.corners.iter().fold(Vec3::ZERO, |acc, &c| acc + c);
        sum * 0.25
    }
}

/// Map a point through an object transform and then its wrapper.
fn to_world(local: &Transform, wrapper: &Transform, v: Vec3) -> Vec3 {
    wrapper.apply(local.apply(v))
}

/// Ambient plus diffuse intensity for a face at `center` facing `normal`.
#[must_use]
pub fn lambert_shade(center: Vec3, normal: Vec3) -> f64 {
    let [lx, ly, lz] = POINT_LIGHT;
    let to_light = (Vec3::new(lx, ly, lz) - center).normalized();
    (AMBIENT_INTENSITY + normal.normalized().dot(to_light).max(0.0)).min(1.0)
}

/// The six faces of a floating box in world space.
#[must_use]
pub fn box_faces(b: &FloatingBox) -> Vec<Face> {
    let world: Vec<Vec3> = CUBE_CORNERS.iter().map(|&c| to_world(&b.local, &b.wrapper, c)).collect();
    CUBE_FACES
        .iter()
        .map(|(idx, n)| {
            let corners = [world[idx[0]], world[idx[1]], world[idx[2]], world[idx[3]]];
            let normal = b.wrapper.apply_direction(b.local.apply_direction(*n));
            let mut face = Face { corners, normal, shade: 0.0 };
            face.shade = lambert_shade(face.center(), normal);
            face
        })
        .collect()
}

/// Latitude rings and longitude meridians of the wire sphere, as world-space polylines.
#[must_use]
pub fn sphere_lines(s: &WireSphere) -> Vec<Vec<Vec3>> {
    let n = s.segments.max(3);
    let r = s.radius;
    let mut lines = Vec::with_capacity(2 * n);

    let point = |theta: f64, phi: f64| {
        let local = Vec3::new(r * phi.sin() * theta.cos(), r * phi.cos(), r * phi.sin() * theta.sin());
        to_world(&s.local, &s.wrapper, local)
    };

    // Rings, skipping the poles.
    for i in 1..n {
        let phi = PI * (i as f64) / (n as f64);
        lines.push((0..=n).map(|j| point(TAU * (j as f64) / (n as f64), phi)).collect());
    }

    // Meridians from pole to pole.
    for j in 0..n {
        let theta = TAU * (j as f64) / (n as f64);
        lines.push((0..=n).map(|i| point(theta, PI * (i as f64) / (n as f64))).collect());
    }

    lines
}

/// Particle positions in world space.
#[must_use]
pub fn particle_points(p: &ParticleField) -> Vec<Vec3> {
    p.points.iter().map(|&v| p.local.apply(v)).collect()
}
