//! Scene objects and their per-frame animation.
//!
//! `HeroScene` holds the decorative content of the hero section. Every object
//! is a plain value updated by [`HeroScene::advance`]; nothing here knows
//! about the canvas or the browser.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    BOX_BOB_AMPLITUDE, BOX_SPIN_PER_FRAME, FLOAT_OFFSET_RANGE, PARTICLE_COUNT, PARTICLE_HALF_EXTENT,
    PARTICLE_SPIN_PER_FRAME, REFERENCE_FPS, SPHERE_SPIN_PER_FRAME,
};
use crate::math::{Euler, Transform, Vec3};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xff) as u8, g: ((hex >> 8) & 0xff) as u8, b: (hex & 0xff) as u8 }
    }

    /// CSS `rgba()` string with each channel multiplied by `shade` (clamped to 0..=1).
    #[must_use]
    pub fn css(self, shade: f64, alpha: f64) -> String {
        let shade = shade.clamp(0.0, 1.0);
        let channel = |c: u8| (f64::from(c) * shade).round();
        format!("rgba({}, {}, {}, {alpha})", channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Gentle bobbing and tilting applied to a wrapper around an object.
///
/// `offset` is a random phase so wrappers with the same speed drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
    pub offset: f64,
}

impl FloatMotion {
    /// Wrapper transform at `elapsed` seconds.
    #[must_use]
    pub fn transform_at(&self, elapsed: f64) -> Transform {
        let phase = (self.offset + elapsed) / 4.0 * self.speed;
        let (s, c) = phase.sin_cos();
        Transform {
            position: Vec3::new(0.0, s / 10.0 * self.float_intensity, 0.0),
            rotation: Euler::new(
                c / 8.0 * self.rotation_intensity,
                s / 8.0 * self.rotation_intensity,
                s / 20.0 * self.rotation_intensity,
            ),
            scale: 1.0,
        }
    }
}

/// A translucent unit cube that spins and bobs inside a float wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingBox {
    pub base: Vec3,
    pub color: Rgb,
    pub opacity: f64,
    pub local: Transform,
    pub float: FloatMotion,
    pub wrapper: Transform,
}

impl FloatingBox {
    fn new(base: Vec3, color: Rgb, scale: f64, offset: f64) -> Self {
        Self {
            base,
            color,
            opacity: 0.8,
            local: Transform { position: base, rotation: Euler::default(), scale },
            float: FloatMotion { speed: 2.0, rotation_intensity: 1.0, float_intensity: 0.5, offset },
            wrapper: Transform::default(),
        }
    }

    fn advance(&mut self, frames: f64, elapsed: f64) {
        self.local.rotation.x += BOX_SPIN_PER_FRAME * frames;
        self.local.rotation.y += BOX_SPIN_PER_FRAME * frames;
        self.local.position.y = self.base.y + (elapsed + self.base.x).sin() * BOX_BOB_AMPLITUDE;
        self.wrapper = self.float.transform_at(elapsed);
    }
}

/// Translucent wireframe sphere behind the hero text.
#[derive(Debug, Clone, PartialEq)]
pub struct WireSphere {
    pub radius: f64,
    pub segments: usize,
    pub color: Rgb,
    pub opacity: f64,
    pub local: Transform,
    pub float: FloatMotion,
    pub wrapper: Transform,
}

impl WireSphere {
    fn new(offset: f64) -> Self {
        Self {
            radius: 1.5,
            segments: 32,
            color: Rgb::from_hex(0x8b_5c_f6),
            opacity: 0.3,
            local: Transform { position: Vec3::new(0.0, 0.0, -2.0), ..Transform::default() },
            float: FloatMotion { speed: 1.5, rotation_intensity: 0.5, float_intensity: 1.0, offset },
            wrapper: Transform::default(),
        }
    }

    fn advance(&mut self, frames: f64, elapsed: f64) {
        self.local.rotation.x = elapsed.sin() * 0.2;
        self.local.rotation.y += SPHERE_SPIN_PER_FRAME * frames;
        self.local.position.y = (elapsed * 0.5).sin() * 0.3;
        self.wrapper = self.float.transform_at(elapsed);
    }
}

/// Cloud of small points drifting around the whole scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub points: Vec<Vec3>,
    pub color: Rgb,
    pub size: f64,
    pub opacity: f64,
    pub local: Transform,
}

impl ParticleField {
    fn scattered(rng: &mut SmallRng) -> Self {
        let h = PARTICLE_HALF_EXTENT;
        let points = (0..PARTICLE_COUNT)
            .map(|_| Vec3::new(rng.random_range(-h..h), rng.random_range(-h..h), rng.random_range(-h..h)))
            .collect();
        Self { points, color: Rgb::from_hex(0x60_a5_fa), size: 0.05, opacity: 0.6, local: Transform::default() }
    }

    fn advance(&mut self, frames: f64, elapsed: f64) {
        self.local.rotation.y += PARTICLE_SPIN_PER_FRAME * frames;
        self.local.rotation.x = (elapsed * 0.1).sin() * 0.1;
    }
}

/// Hero box layout: position, colour, scale.
const HERO_BOXES: [([f64; 3], u32, f64); 6] = [
    ([-3.0, 2.0, -1.0], 0x3b_82_f6, 0.8),
    ([3.0, -1.0, -1.0], 0x8b_5c_f6, 0.6),
    ([-2.0, -2.0, 1.0], 0x06_b6_d4, 0.7),
    ([2.0, 2.0, 1.0], 0xf5_9e_0b, 0.5),
    ([0.0, 3.0, -3.0], 0xef_44_44, 0.9),
    ([-4.0, 0.0, 2.0], 0x10_b9_81, 0.6),
];

/// Everything drawn in the hero canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroScene {
    pub boxes: Vec<FloatingBox>,
    pub sphere: WireSphere,
    pub particles: ParticleField,
    pub elapsed: f64,
}

impl HeroScene {
    /// Build the hero scene. The seed fixes particle positions and float phases.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let boxes = HERO_BOXES
            .iter()
            .map(|&([x, y, z], hex, scale)| {
                FloatingBox::new(Vec3::new(x, y, z), Rgb::from_hex(hex), scale, rng.random_range(0.0..FLOAT_OFFSET_RANGE))
            })
            .collect();
        let sphere = WireSphere::new(rng.random_range(0.0..FLOAT_OFFSET_RANGE));
        let particles = ParticleField::scattered(&mut rng);
        let mut scene = Self { boxes, sphere, particles, elapsed: 0.0 };
        scene.advance(0.0);
        scene
    }

    /// Move the scene forward to `elapsed` seconds since start.
    ///
    /// `step` is the time since the previous call; incremental spins are
    /// scaled by it so motion speed does not depend on the frame rate.
    pub fn advance_by(&mut self, step: f64, elapsed: f64) {
        let frames = step.max(0.0) * REFERENCE_FPS;
        for b in &mut self.boxes {
            b.advance(frames, elapsed);
        }
        self.sphere.advance(frames, elapsed);
        self.particles.advance(frames, elapsed);
        self.elapsed = elapsed;
    }

    /// Recompute time-driven state at `elapsed` without accumulating spin.
    pub fn advance(&mut self, elapsed: f64) {
        self.advance_by(0.0, elapsed);
    }
}
