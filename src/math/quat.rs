//! Unit quaternion rotation
//!
//! Unit length is enforced at the construction sites (`from_axis_angle`,
//! `normalized`) and nowhere else; multiplying non-unit quaternions is
//! legal and simply composes. A near-zero quaternion normalizes to the
//! identity rotation instead of NaN.

use std::ops::Mul;

use super::mat4::Mat4;
use super::vec::Vec3;

/// Quaternion `(x, y, z, w)` with `w` the scalar part
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Unit-length copy; near-zero input yields the identity rotation.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 1e-8 {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotation of `radians` about `axis` (normalized here), returned as a
    /// unit quaternion. A near-zero axis yields the identity rotation.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let axis = axis.normalized();
        let half = radians * 0.5;
        let (s, c) = half.sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c).normalized()
    }

    /// Equivalent rotation matrix; assumes `self` is unit length.
    pub fn to_mat4(self) -> Mat4 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        let mut m = Mat4::IDENTITY;

        m[(0, 0)] = 1.0 - 2.0 * (yy + zz);
        m[(1, 0)] = 2.0 * (xy + wz);
        m[(2, 0)] = 2.0 * (xz - wy);

        m[(0, 1)] = 2.0 * (xy - wz);
        m[(1, 1)] = 1.0 - 2.0 * (xx + zz);
        m[(2, 1)] = 2.0 * (yz + wx);

        m[(0, 2)] = 2.0 * (xz + wy);
        m[(1, 2)] = 2.0 * (yz - wx);
        m[(2, 2)] = 1.0 - 2.0 * (xx + yy);

        m
    }
}

impl Mul for Quat {
    type Output = Quat;

    /// Hamilton product: `(a * b)` applies `b` first, then `a`.
    fn mul(self, b: Quat) -> Quat {
        let a = self;
        Quat::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}
