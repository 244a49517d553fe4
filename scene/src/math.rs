//! Small 3D math kit: vectors, Euler rotations, and object transforms.
//!
//! Rotations follow the usual XYZ Euler convention: the combined matrix is
//! `Rx * Ry * Rz`, so a vector is rotated about z first, then y, then x.

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use std::ops::{Add, Mul, Sub};

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f64::EPSILON { Self::ZERO } else { self * (1.0 / len) }
    }

    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x, y: self.y * c - self.z * s, z: self.y * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c + self.z * s, y: self.y, z: -self.x * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c - self.y * s, y: self.x * s + self.y * c, z: self.z }
    }

    /// Apply an XYZ Euler rotation.
    #[must_use]
    pub fn rotate(self, euler: Euler) -> Self {
        self.rotate_z(euler.z).rotate_y(euler.y).rotate_x(euler.x)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Euler angles in radians, applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Position, rotation and uniform scale of an object relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Euler::default(), scale: 1.0 }
    }
}

impl Transform {
    /// Map a local-space point into the parent space (scale, rotate, translate).
    #[must_use]
    pub fn apply(&self, local: Vec3) -> Vec3 {
        (local * self.scale).rotate(self.rotation) + self.position
    }

    /// Map a local-space direction into the parent space (rotation only).
    #[must_use]
    pub fn apply_direction(&self, local: Vec3) -> Vec3 {
        local.rotate(self.rotation)
    }
}
