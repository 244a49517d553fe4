#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Rgb ---

#[test]
fn rgb_from_hex_splits_channels() {
    assert_eq!(Rgb::from_hex(0x3b_82_f6), Rgb { r: 0x3b, g: 0x82, b: 0xf6 });
}

#[test]
fn rgb_css_applies_shade_and_alpha() {
    let c = Rgb::from_hex(0xff_80_00);
    assert_eq!(c.css(1.0, 0.8), "rgba(255, 128, 0, 0.8)");
    assert_eq!(c.css(0.5, 1.0), "rgba(128, 64, 0, 1)");
}

#[test]
fn rgb_css_clamps_shade() {
    let c = Rgb::from_hex(0x10_20_30);
    assert_eq!(c.css(3.0, 0.5), c.css(1.0, 0.5));
    assert_eq!(c.css(-1.0, 0.5), "rgba(0, 0, 0, 0.5)");
}

// --- FloatMotion ---

#[test]
fn float_motion_at_zero_phase() {
    let motion = FloatMotion { speed: 2.0, rotation_intensity: 1.0, float_intensity: 0.5, offset: 0.0 };
    let t = motion.transform_at(0.0);
    assert!(approx_eq(t.position.y, 0.0));
    assert!(approx_eq(t.rotation.x, 1.0 / 8.0));
    assert!(approx_eq(t.rotation.y, 0.0));
    assert!(approx_eq(t.rotation.z, 0.0));
}

#[test]
fn float_motion_bob_is_bounded_by_intensity() {
    let motion = FloatMotion { speed: 1.5, rotation_intensity: 0.5, float_intensity: 1.0, offset: 12.5 };
    for i in 0..200 {
        let t = motion.transform_at(f64::from(i) * 0.1);
        assert!(t.position.y.abs() <= 0.1 + EPSILON);
        assert!(t.rotation.x.abs() <= 0.5 / 8.0 + EPSILON);
    }
}

// --- HeroScene construction ---

#[test]
fn hero_scene_has_six_boxes_sphere_and_hundred_particles() {
    let scene = HeroScene::new(7);
    assert_eq!(scene.boxes.len(), 6);
    assert_eq!(scene.sphere.segments, 32);
    assert_eq!(scene.sphere.radius, 1.5);
    assert_eq!(scene.particles.points.len(), 100);
}

#[test]
fn hero_boxes_keep_declared_layout() {
    let scene = HeroScene::new(1);
    let first = &scene.boxes[0];
    assert_eq!(first.base, Vec3::new(-3.0, 2.0, -1.0));
    assert_eq!(first.color, Rgb::from_hex(0x3b_82_f6));
    assert_eq!(first.local.scale, 0.8);
    assert_eq!(first.opacity, 0.8);
    let last = &scene.boxes[5];
    assert_eq!(last.base, Vec3::new(-4.0, 0.0, 2.0));
    assert_eq!(last.color, Rgb::from_hex(0x10_b9_81));
}

#[test]
fn particles_stay_inside_the_cube() {
    let scene = HeroScene::new(99);
    for p in &scene.particles.points {
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0);
    }
}

#[test]
fn same_seed_builds_same_scene() {
    assert_eq!(HeroScene::new(42), HeroScene::new(42));
}

#[test]
fn different_seeds_scatter_particles_differently() {
    assert_ne!(HeroScene::new(1).particles.points, HeroScene::new(2).particles.points);
}

// --- Animation ---

#[test]
fn box_bob_follows_sine_of_time_plus_base_x() {
    let mut scene = HeroScene::new(3);
    scene.advance(1.25);
    let b = &scene.boxes[1];
    let expected = b.base.y + (1.25 + b.base.x).sin() * 0.2;
    assert!(approx_eq(b.local.position.y, expected));
}

#[test]
fn box_spin_accumulates_per_reference_frame() {
    let mut scene = HeroScene::new(3);
    scene.advance_by(1.0 / 60.0, 1.0 / 60.0);
    scene.advance_by(1.0 / 60.0, 2.0 / 60.0);
    let b = &scene.boxes[0];
    assert!(approx_eq(b.local.rotation.x, 0.02));
    assert!(approx_eq(b.local.rotation.y, 0.02));
}

#[test]
fn sphere_motion_is_time_driven() {
    let mut scene = HeroScene::new(3);
    scene.advance(2.0);
    assert!(approx_eq(scene.sphere.local.rotation.x, 2.0_f64.sin() * 0.2));
    assert!(approx_eq(scene.sphere.local.position.y, 1.0_f64.sin() * 0.3));
    assert!(approx_eq(scene.sphere.local.position.z, -2.0));
}

#[test]
fn particle_field_tilt_and_spin() {
    let mut scene = HeroScene::new(3);
    scene.advance_by(0.5, 10.0);
    assert!(approx_eq(scene.particles.local.rotation.x, 1.0_f64.sin() * 0.1));
    assert!(approx_eq(scene.particles.local.rotation.y, 0.001 * 30.0));
}

#[test]
fn negative_step_does_not_unwind_spin() {
    let mut scene = HeroScene::new(3);
    scene.advance_by(-1.0, 0.0);
    assert_eq!(scene.boxes[0].local.rotation.x, 0.0);
}
