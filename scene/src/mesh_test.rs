#![allow(clippy::float_cmp)]

use super::*;
use crate::shapes::HeroScene;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Lighting ---

#[test]
fn face_towards_light_is_fully_lit() {
    let center = Vec3::ZERO;
    let normal = Vec3::new(1.0, 1.0, 1.0);
    assert!(approx_eq(lambert_shade(center, normal), 1.0));
}

#[test]
fn face_away_from_light_gets_ambient_only() {
    let normal = Vec3::new(-1.0, -1.0, -1.0);
    assert!(approx_eq(lambert_shade(Vec3::ZERO, normal), 0.5));
}

// --- Boxes ---

#[test]
fn box_has_six_unit_normal_faces() {
    let scene = HeroScene::new(5);
    let faces = box_faces(&scene.boxes[0]);
    assert_eq!(faces.len(), 6);
    for face in &faces {
        assert!(approx_eq(face.normal.length(), 1.0));
        assert!((0.5..=1.0).contains(&face.shade));
    }
}

#[test]
fn box_faces_surround_the_box_center() {
    let scene = HeroScene::new(5);
    let b = &scene.boxes[2];
    let faces = box_faces(b);
    let center = faces.iter().fold(Vec3::ZERO, |acc, f| acc + f.center()) * (1.0 / 6.0);
    let expected = b.wrapper.apply(b.local.position);
    assert!(approx_eq(center.x, expected.x));
    assert!(approx_eq(center.y, expected.y));
    assert!(approx_eq(center.z, expected.z));
}

#[test]
fn box_face_edge_matches_scale() {
    let scene = HeroScene::new(5);
    let b = &scene.boxes[3];
    let face = &box_faces(b)[0];
    let edge = (face.corners[1] - face.corners[0]).length();
    assert!(approx_eq(edge, b.local.scale));
}

#[test]
fn face_normals_point_outward() {
    let scene = HeroScene::new(8);
    let b = &scene.boxes[4];
    let center = b.wrapper.apply(b.local.position);
    for face in box_faces(b) {
        assert!((face.center() - center).dot(face.normal) > 0.0);
    }
}

// --- Sphere ---

#[test]
fn sphere_has_rings_and_meridians() {
    let scene = HeroScene::new(5);
    let lines = sphere_lines(&scene.sphere);
    // 31 rings + 32 meridians, 33 points each.
    assert_eq!(lines.len(), 63);
    assert!(lines.iter().all(|line| line.len() == 33));
}

#[test]
fn sphere_points_lie_on_radius() {
    let scene = HeroScene::new(5);
    let s = &scene.sphere;
    let center = s.wrapper.apply(s.local.position);
    for line in sphere_lines(s) {
        for p in line {
            assert!(((p - center).length() - 1.5).abs() < 1e-6);
        }
    }
}

// --- Particles ---

#[test]
fn particle_rotation_preserves_distance_from_origin() {
    let mut scene = HeroScene::new(5);
    scene.advance_by(3.0, 7.0);
    let before: Vec<f64> = scene.particles.points.iter().map(|p| p.length()).collect();
    let after: Vec<f64> = particle_points(&scene.particles).iter().map(|p| p.length()).collect();
    for (a, b) in before.iter().zip(after.iter()) {
        assert!((a - b).abs() < 1e-6);
    }
}
