//! 3×3 matrix
//!
//! Column-major storage (`m[col * 3 + row]`) behind a `(row, col)` indexing
//! contract. All algorithms are written against the indexer, so they stay
//! correct regardless of the storage layout; `to_cols_array` is the
//! bit-exact column-major flatten for uniform upload.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::vec::Vec3;

/// Determinant magnitude below which a matrix counts as singular.
const DET_EPS: f32 = 1e-8;

/// 3×3 float matrix, column-major storage, `(row, col)` indexing
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const ZERO: Mat3 = Mat3 { m: [0.0; 9] };

    #[rustfmt::skip]
    pub const IDENTITY: Mat3 = Mat3 {
        m: [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
    };

    /// Builds from a column-major array (inverse of [`Mat3::to_cols_array`]).
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Row `r` as a vector.
    pub fn row(&self, r: usize) -> Vec3 {
        Vec3::new(self[(r, 0)], self[(r, 1)], self[(r, 2)])
    }

    /// Column `c` as a vector.
    pub fn col(&self, c: usize) -> Vec3 {
        Vec3::new(self[(0, c)], self[(1, c)], self[(2, c)])
    }

    /// Uniform scale
    pub fn from_scale(s: f32) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 0)] = s;
        m[(1, 1)] = s;
        m[(2, 2)] = s;
        m
    }

    /// Per-axis scale
    pub fn from_nonuniform_scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 0)] = s.x;
        m[(1, 1)] = s.y;
        m[(2, 2)] = s.z;
        m
    }

    /// Right-handed rotation about the X axis
    pub fn from_rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        m
    }

    /// Right-handed rotation about the Y axis
    pub fn from_rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        m
    }

    /// Right-handed rotation about the Z axis
    pub fn from_rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        m
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis is normalized here, so callers may pass any non-zero vector.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let axis = axis.normalized();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        let mut m = Self::IDENTITY;

        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;

        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;

        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;

        m
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut r = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                r[(row, col)] = self[(col, row)];
            }
        }
        r
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let a = self[(0, 0)];
        let b = self[(0, 1)];
        let c = self[(0, 2)];
        let d = self[(1, 0)];
        let e = self[(1, 1)];
        let f = self[(1, 2)];
        let g = self[(2, 0)];
        let h = self[(2, 1)];
        let i = self[(2, 2)];

        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Explicit cofactor inverse; `None` when `|det| < 1e-8`.
    pub fn invert(&self) -> Option<Self> {
        let a = self[(0, 0)];
        let b = self[(0, 1)];
        let c = self[(0, 2)];
        let d = self[(1, 0)];
        let e = self[(1, 1)];
        let f = self[(1, 2)];
        let g = self[(2, 0)];
        let h = self[(2, 1)];
        let i = self[(2, 2)];

        let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);
        if det.abs() < DET_EPS {
            return None;
        }
        let inv_det = 1.0 / det;

        let mut inv = Self::ZERO;

        inv[(0, 0)] = (e * i - f * h) * inv_det;
        inv[(0, 1)] = (c * h - b * i) * inv_det;
        inv[(0, 2)] = (b * f - c * e) * inv_det;

        inv[(1, 0)] = (f * g - d * i) * inv_det;
        inv[(1, 1)] = (a * i - c * g) * inv_det;
        inv[(1, 2)] = (c * d - a * f) * inv_det;

        inv[(2, 0)] = (d * h - e * g) * inv_det;
        inv[(2, 1)] = (b * g - a * h) * inv_det;
        inv[(2, 2)] = (a * e - b * d) * inv_det;

        Some(inv)
    }

    /// Like [`Mat3::invert`] but falls back to identity for singular input.
    pub fn inverted(&self) -> Self {
        self.invert().unwrap_or(Self::IDENTITY)
    }

    /// Column-major `[f32; 9]`, layout `arr[col * 3 + row]`, suitable for
    /// `glUniformMatrix3fv`-style upload with `transpose = false`.
    pub const fn to_cols_array(&self) -> [f32; 9] {
        self.m
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 3 && col < 3,
            "Mat3 index (row, col) must be in 0..3, got ({row}, {col})"
        );
        &self.m[col * 3 + row]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 3 && col < 3,
            "Mat3 index (row, col) must be in 0..3, got ({row}, {col})"
        );
        &mut self.m[col * 3 + row]
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    /// Standard matrix product under the `(row, col)` accessor.
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut r = Mat3::ZERO;
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self[(row, k)] * rhs[(k, col)];
                }
                r[(row, col)] = sum;
            }
        }
        r
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    /// Column-vector convention: `v' = M * v`
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self[(0, 0)] * v.x + self[(0, 1)] * v.y + self[(0, 2)] * v.z,
            self[(1, 0)] * v.x + self[(1, 1)] * v.y + self[(1, 2)] * v.z,
            self[(2, 0)] * v.x + self[(2, 1)] * v.y + self[(2, 2)] * v.z,
        )
    }
}

impl Mul<f32> for Mat3 {
    type Output = Mat3;

    fn mul(self, s: f32) -> Mat3 {
        let mut r = self;
        for v in r.m.iter_mut() {
            *v *= s;
        }
        r
    }
}

impl Mul<Mat3> for f32 {
    type Output = Mat3;

    fn mul(self, m: Mat3) -> Mat3 {
        m * self
    }
}

impl Add for Mat3 {
    type Output = Mat3;

    fn add(self, rhs: Mat3) -> Mat3 {
        let mut r = self;
        for (v, o) in r.m.iter_mut().zip(rhs.m.iter()) {
            *v += o;
        }
        r
    }
}

impl Sub for Mat3 {
    type Output = Mat3;

    fn sub(self, rhs: Mat3) -> Mat3 {
        let mut r = self;
        for (v, o) in r.m.iter_mut().zip(rhs.m.iter()) {
            *v -= o;
        }
        r
    }
}
