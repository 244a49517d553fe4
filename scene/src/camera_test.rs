#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn viewport() -> Viewport {
    Viewport { width: 800.0, height: 600.0, dpr: 1.0 }
}

// --- Defaults ---

#[test]
fn default_camera_sits_on_positive_z() {
    let cam = OrbitCamera::default();
    let pos = cam.position();
    assert!(approx_eq(pos.x, 0.0));
    assert!(approx_eq(pos.y, 0.0));
    assert!(approx_eq(pos.z, 5.0));
    assert_eq!(cam.fov_y_deg, 75.0);
}

#[test]
fn viewport_default_is_empty() {
    assert!(Viewport::default().is_empty());
    assert!(!viewport().is_empty());
}

// --- View transform ---

#[test]
fn origin_is_in_front_of_default_camera() {
    let cam = OrbitCamera::default();
    let view = cam.to_view(Vec3::ZERO);
    assert!(approx_eq(view.z, -5.0));
}

#[test]
fn camera_position_maps_to_view_origin() {
    let cam = OrbitCamera { yaw: 0.7, pitch: -0.4, ..OrbitCamera::default() };
    let view = cam.to_view(cam.position());
    assert!(approx_eq(view.x, 0.0));
    assert!(approx_eq(view.y, 0.0));
    assert!(approx_eq(view.z, 0.0));
}

// --- Projection ---

#[test]
fn origin_projects_to_viewport_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::ZERO, &viewport());
    assert!(p.is_some_and(|p| approx_eq(p.screen.x, 400.0) && approx_eq(p.screen.y, 300.0) && approx_eq(p.depth, 5.0)));
}

#[test]
fn positive_y_projects_above_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), &viewport());
    assert!(p.is_some_and(|p| p.screen.y < 300.0));
}

#[test]
fn positive_x_projects_right_of_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::new(1.0, 0.0, 0.0), &viewport());
    assert!(p.is_some_and(|p| p.screen.x > 400.0));
}

#[test]
fn points_behind_camera_are_not_projected() {
    let cam = OrbitCamera::default();
    assert!(cam.project(Vec3::new(0.0, 0.0, 6.0), &viewport()).is_none());
}

#[test]
fn farther_points_project_smaller() {
    let cam = OrbitCamera::default();
    let vp = viewport();
    let near = cam.project(Vec3::new(0.0, 0.0, 2.0), &vp);
    let far = cam.project(Vec3::new(0.0, 0.0, -2.0), &vp);
    match (near, far) {
        (Some(near), Some(far)) => assert!(near.scale > far.scale),
        _ => panic!("both points should project"),
    }
}

// --- Orbit ---

#[test]
fn horizontal_drag_changes_yaw_only() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by(150.0, 0.0, &viewport());
    assert!(approx_eq(cam.yaw, -std::f64::consts::TAU * 0.25));
    assert_eq!(cam.pitch, 0.0);
}

#[test]
fn pitch_is_clamped() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by(0.0, 10_000.0, &viewport());
    assert!(cam.pitch < FRAC_PI_2);
    assert!(approx_eq(cam.pitch, 85.0_f64.to_radians()));
    cam.orbit_by(0.0, -20_000.0, &viewport());
    assert!(approx_eq(cam.pitch, -(85.0_f64.to_radians())));
}

#[test]
fn orbit_ignores_empty_viewport() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by(50.0, 50.0, &Viewport::default());
    assert_eq!(cam.yaw, 0.0);
    assert_eq!(cam.pitch, 0.0);
}
