//! Shared numeric constants for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Distance from the orbit target to the camera at start-up.
pub const CAMERA_DISTANCE: f64 = 5.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Points closer to the camera than this are not projected.
pub const CAMERA_NEAR: f64 = 0.1;

/// Orbit pitch limit in degrees, either side of the horizon.
pub const MAX_PITCH_DEG: f64 = 85.0;

// ── Lighting ────────────────────────────────────────────────────

/// Ambient light contribution applied to every face.
pub const AMBIENT_INTENSITY: f64 = 0.5;

/// World-space position of the single point light.
pub const POINT_LIGHT: [f64; 3] = [10.0, 10.0, 10.0];

// ── Motion ──────────────────────────────────────────────────────

/// Reference frame rate the per-frame increments were tuned for.
pub const REFERENCE_FPS: f64 = 60.0;

/// Longest step taken by a single `advance`, in seconds. Larger gaps (a
/// background tab, a debugger pause) are clamped so shapes do not jump.
pub const MAX_FRAME_STEP_S: f64 = 0.1;

/// Box spin per reference frame on both x and y, in radians.
pub const BOX_SPIN_PER_FRAME: f64 = 0.01;

/// Vertical bob amplitude of each box.
pub const BOX_BOB_AMPLITUDE: f64 = 0.2;

/// Sphere spin around y per reference frame, in radians.
pub const SPHERE_SPIN_PER_FRAME: f64 = 0.005;

/// Particle field spin around y per reference frame, in radians.
pub const PARTICLE_SPIN_PER_FRAME: f64 = 0.001;

/// Particles are scattered uniformly inside a cube of this half-extent.
pub const PARTICLE_HALF_EXTENT: f64 = 10.0;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 100;

/// Upper bound of the random phase given to each float wobble.
pub const FLOAT_OFFSET_RANGE: f64 = 10_000.0;
