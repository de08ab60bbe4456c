//! 4×4 matrix
//!
//! Column-major storage (`m[col * 4 + row]`) behind a `(row, col)` indexing
//! contract, column-vector convention (`v' = M * v`). Carries the named
//! constructors the render path needs: scale, per-axis and arbitrary-axis
//! rotation, translation, look-at and OpenGL-style perspective. Inversion
//! is explicit cofactor expansion over 2×2 minors, no pivoting.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::vec::{Vec3, Vec4};

/// Determinant magnitude below which a matrix counts as singular.
const DET_EPS: f32 = 1e-8;

/// 4×4 float matrix, column-major storage, `(row, col)` indexing
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4 { m: [0.0; 16] };

    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Builds from a column-major array (inverse of [`Mat4::to_cols_array`]).
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Row `r` as a vector.
    pub fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self[(r, 0)], self[(r, 1)], self[(r, 2)], self[(r, 3)])
    }

    /// Column `c` as a vector.
    pub fn col(&self, c: usize) -> Vec4 {
        Vec4::new(self[(0, c)], self[(1, c)], self[(2, c)], self[(3, c)])
    }

    /// Translation by `t`
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 3)] = t.x;
        m[(1, 3)] = t.y;
        m[(2, 3)] = t.z;
        m
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

    /// View matrix looking from `eye` towards `target`.
    ///
    /// Builds the camera basis `f = normalize(target - eye)`,
    /// `s = normalize(f × up)`, `u = s × f` and maps `eye` to the origin.
    /// `look_at(ZERO, -UNIT_Z, UNIT_Y)` is the identity.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        let mut m = Self::IDENTITY;

        // basis rows
        m[(0, 0)] = s.x;
        m[(0, 1)] = s.y;
        m[(0, 2)] = s.z;

        m[(1, 0)] = u.x;
        m[(1, 1)] = u.y;
        m[(1, 2)] = u.z;

        m[(2, 0)] = -f.x;
        m[(2, 1)] = -f.y;
        m[(2, 2)] = -f.z;

        // translation
        m[(0, 3)] = -s.dot(eye);
        m[(1, 3)] = -u.dot(eye);
        m[(2, 3)] = f.dot(eye);

        m
    }

    /// OpenGL-style perspective projection.
    ///
    /// Row 3 is `(0, 0, -1, 0)`; NDC depth lands in [-1, 1] and is mapped
    /// to [0, 1] separately where depth-buffer comparisons need it.
    pub fn perspective(fov_y_radians: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (fov_y_radians * 0.5).tan();

        let mut m = Self::ZERO;
        m[(0, 0)] = f / aspect;
        m[(1, 1)] = f;
        m[(2, 2)] = (z_far + z_near) / (z_near - z_far);
        m[(2, 3)] = (2.0 * z_far * z_near) / (z_near - z_far);
        m[(3, 2)] = -1.0;
        m
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut r = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                r[(row, col)] = self[(col, row)];
            }
        }
        r
    }

    /// Laplace expansion over the twelve 2×2 minors.
    pub fn determinant(&self) -> f32 {
        let a00 = self[(0, 0)];
        let a01 = self[(0, 1)];
        let a02 = self[(0, 2)];
        let a03 = self[(0, 3)];
        let a10 = self[(1, 0)];
        let a11 = self[(1, 1)];
        let a12 = self[(1, 2)];
        let a13 = self[(1, 3)];
        let a20 = self[(2, 0)];
        let a21 = self[(2, 1)];
        let a22 = self[(2, 2)];
        let a23 = self[(2, 3)];
        let a30 = self[(3, 0)];
        let a31 = self[(3, 1)];
        let a32 = self[(3, 2)];
        let a33 = self[(3, 3)];

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Explicit cofactor inverse; `None` when `|det| < 1e-8`.
    pub fn invert(&self) -> Option<Self> {
        let a00 = self[(0, 0)];
        let a01 = self[(0, 1)];
        let a02 = self[(0, 2)];
        let a03 = self[(0, 3)];
        let a10 = self[(1, 0)];
        let a11 = self[(1, 1)];
        let a12 = self[(1, 2)];
        let a13 = self[(1, 3)];
        let a20 = self[(2, 0)];
        let a21 = self[(2, 1)];
        let a22 = self[(2, 2)];
        let a23 = self[(2, 3)];
        let a30 = self[(3, 0)];
        let a31 = self[(3, 1)];
        let a32 = self[(3, 2)];
        let a33 = self[(3, 3)];

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det.abs() < DET_EPS {
            return None;
        }
        let inv_det = 1.0 / det;

        let mut inv = Self::ZERO;

        inv[(0, 0)] = (a11 * b11 - a12 * b10 + a13 * b09) * inv_det;
        inv[(0, 1)] = (-a01 * b11 + a02 * b10 - a03 * b09) * inv_det;
        inv[(0, 2)] = (a31 * b05 - a32 * b04 + a33 * b03) * inv_det;
        inv[(0, 3)] = (-a21 * b05 + a22 * b04 - a23 * b03) * inv_det;

        inv[(1, 0)] = (-a10 * b11 + a12 * b08 - a13 * b07) * inv_det;
        inv[(1, 1)] = (a00 * b11 - a02 * b08 + a03 * b07) * inv_det;
        inv[(1, 2)] = (-a30 * b05 + a32 * b02 - a33 * b01) * inv_det;
        inv[(1, 3)] = (a20 * b05 - a22 * b02 + a23 * b01) * inv_det;

        inv[(2, 0)] = (a10 * b10 - a11 * b08 + a13 * b06) * inv_det;
        inv[(2, 1)] = (-a00 * b10 + a01 * b08 - a03 * b06) * inv_det;
        inv[(2, 2)] = (a30 * b04 - a31 * b02 + a33 * b00) * inv_det;
        inv[(2, 3)] = (-a20 * b04 + a21 * b02 - a23 * b00) * inv_det;

        inv[(3, 0)] = (-a10 * b09 + a11 * b07 - a12 * b06) * inv_det;
        inv[(3, 1)] = (a00 * b09 - a01 * b07 + a02 * b06) * inv_det;
        inv[(3, 2)] = (-a30 * b03 + a31 * b01 - a32 * b00) * inv_det;
        inv[(3, 3)] = (a20 * b03 - a21 * b01 + a22 * b00) * inv_det;

        Some(inv)
    }

    /// Like [`Mat4::invert`] but falls back to identity for singular input.
    pub fn inverted(&self) -> Self {
        self.invert().unwrap_or(Self::IDENTITY)
    }

    /// Column-major `[f32; 16]`, layout `arr[col * 4 + row]`, suitable for
    /// `glUniformMatrix4fv`-style upload with `transpose = false`.
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Column-major `[[f32; 4]; 4]` for uniform structs.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let mut out = [[0.0; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                out[col][row] = self.m[col * 4 + row];
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 4 && col < 4,
            "Mat4 index (row, col) must be in 0..4, got ({row}, {col})"
        );
        &self.m[col * 4 + row]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 4 && col < 4,
            "Mat4 index (row, col) must be in 0..4, got ({row}, {col})"
        );
        &mut self.m[col * 4 + row]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Standard matrix product under the `(row, col)` accessor.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut r = Mat4::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self[(row, k)] * rhs[(k, col)];
                }
                r[(row, col)] = sum;
            }
        }
        r
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    /// Column-vector convention: `v' = M * v`
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self[(0, 0)] * v.x + self[(0, 1)] * v.y + self[(0, 2)] * v.z + self[(0, 3)] * v.w,
            self[(1, 0)] * v.x + self[(1, 1)] * v.y + self[(1, 2)] * v.z + self[(1, 3)] * v.w,
            self[(2, 0)] * v.x + self[(2, 1)] * v.y + self[(2, 2)] * v.z + self[(2, 3)] * v.w,
            self[(3, 0)] * v.x + self[(3, 1)] * v.y + self[(3, 2)] * v.z + self[(3, 3)] * v.w,
        )
    }
}

impl Mul<f32> for Mat4 {
    type Output = Mat4;

    fn mul(self, s: f32) -> Mat4 {
        let mut r = self;
        for v in r.m.iter_mut() {
            *v *= s;
        }
        r
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, m: Mat4) -> Mat4 {
        m * self
    }
}

impl Add for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Mat4 {
        let mut r = self;
        for (v, o) in r.m.iter_mut().zip(rhs.m.iter()) {
            *v += o;
        }
        r
    }
}

impl Sub for Mat4 {
    type Output = Mat4;

    fn sub(self, rhs: Mat4) -> Mat4 {
        let mut r = self;
        for (v, o) in r.m.iter_mut().zip(rhs.m.iter()) {
            *v -= o;
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_util::*;
    use rand::Rng;

    #[test]
    fn test_identity_diagonal() {
        let m = Mat4::IDENTITY;
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_near(expected, m[(row, col)], 0.0);
            }
        }
    }

    #[test]
    fn test_indexer_get_set() {
        let mut m = Mat4::IDENTITY;
        m[(0, 3)] = 10.0;
        m[(2, 1)] = -7.5;
        m[(3, 0)] = 0.25;
        assert_near(10.0, m[(0, 3)], 0.0);
        assert_near(-7.5, m[(2, 1)], 0.0);
        assert_near(0.25, m[(3, 0)], 0.0);
    }

    #[test]
    #[should_panic(expected = "Mat4 index")]
    fn test_index_row_out_of_range_panics() {
        let _ = Mat4::IDENTITY[(4, 0)];
    }

    #[test]
    #[should_panic(expected = "Mat4 index")]
    fn test_index_col_out_of_range_panics() {
        let _ = Mat4::IDENTITY[(0, 4)];
    }

    #[test]
    fn test_to_cols_array_matches_indexer() {
        // contract: arr[col * 4 + row] == m[(row, col)]
        let mut m = Mat4::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                m[(row, col)] = 10.0 * row as f32 + col as f32;
            }
        }
        let a = m.to_cols_array();
        let a2 = m.to_cols_array_2d();
        for row in 0..4 {
            for col in 0..4 {
                assert_near(m[(row, col)], a[col * 4 + row], 0.0);
                assert_near(m[(row, col)], a2[col][row], 0.0);
            }
        }
        assert_eq!(m, Mat4::from_cols_array(a));
    }

    #[test]
    fn test_identity_multiply_is_neutral() {
        let a = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_nonuniform_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_mat4_near(a, Mat4::IDENTITY * a, 0.0);
        assert_mat4_near(a, a * Mat4::IDENTITY, 0.0);
    }

    #[test]
    fn test_composition_associates_on_vector() {
        let a = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Mat4::from_rotation_y(0.7);
        let c = Mat4::from_nonuniform_scale(Vec3::new(2.0, 3.0, 4.0));
        let v = Vec4::new(1.25, -2.0, 0.5, 1.0);

        let lhs = (a * b * c) * v;
        let rhs = a * (b * (c * v));
        assert_vec4_near(lhs, rhs, EPS);
    }

    #[test]
    fn test_scale_scenario() {
        let v = Mat4::from_scale(2.0) * Vec4::new(1.0, -2.0, 3.0, 1.0);
        assert_vec4_near(Vec4::new(2.0, -4.0, 6.0, 1.0), v, 0.0);
    }

    #[test]
    fn test_translation_moves_points_not_directions() {
        let t = Mat4::from_translation(Vec3::new(10.0, 0.0, -5.0));

        let p = t * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_vec4_near(Vec4::new(11.0, 2.0, -2.0, 1.0), p, 0.0);

        let d = t * Vec4::new(1.0, 2.0, 3.0, 0.0);
        assert_vec4_near(Vec4::new(1.0, 2.0, 3.0, 0.0), d, 0.0);
    }

    #[test]
    fn test_rotation_directions() {
        let half_pi = std::f32::consts::FRAC_PI_2;

        let v = Mat4::from_rotation_x(half_pi) * Vec4::UNIT_Y;
        assert_vec4_near(Vec4::UNIT_Z, v, EPS);

        let v = Mat4::from_rotation_y(half_pi) * Vec4::UNIT_X;
        assert_vec4_near(-Vec4::UNIT_Z, v, EPS);

        let v = Mat4::from_rotation_z(half_pi) * Vec4::UNIT_X;
        assert_vec4_near(Vec4::UNIT_Y, v, EPS);
    }

    #[test]
    fn test_rotation_preserves_direction_length() {
        let m = Mat4::from_axis_angle(Vec3::new(1.0, -2.0, 0.5), 1.1);
        let d = Vec4::new(0.3, -0.4, 1.2, 0.0);
        assert_near(d.length(), (m * d).length(), EPS);
    }

    #[test]
    fn test_axis_angle_matches_rotation_y() {
        for i in 0..10 {
            let theta = i as f32 * 0.7 - 2.0;
            let a = Mat4::from_axis_angle(Vec3::UNIT_Y, theta);
            let b = Mat4::from_rotation_y(theta);
            let v = Vec4::new(0.4, -1.0, 2.5, 0.0);
            assert_vec4_near(b * v, a * v, EPS);
        }
    }

    #[test]
    fn test_look_at_canonical_is_identity() {
        let m = Mat4::look_at(Vec3::ZERO, -Vec3::UNIT_Z, Vec3::UNIT_Y);
        assert_mat4_near(Mat4::IDENTITY, m, EPS);
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(3.0, -2.0, 7.5);
        let m = Mat4::look_at(eye, Vec3::new(0.5, 1.0, -4.0), Vec3::UNIT_Y);
        let mapped = m * eye.extend(1.0);
        assert_vec4_near(Vec4::UNIT_W, mapped, 1e-4);
    }

    #[test]
    fn test_look_at_basis_is_orthonormal() {
        let m = Mat4::look_at(
            Vec3::new(1.0, 4.0, -2.0),
            Vec3::new(-3.0, 0.5, 6.0),
            Vec3::UNIT_Y,
        );
        let r0 = m.row(0).truncate();
        let r1 = m.row(1).truncate();
        let r2 = m.row(2).truncate();

        assert_near(1.0, r0.length(), EPS);
        assert_near(1.0, r1.length(), EPS);
        assert_near(1.0, r2.length(), EPS);
        assert_near(0.0, r0.dot(r1), EPS);
        assert_near(0.0, r0.dot(r2), EPS);
        assert_near(0.0, r1.dot(r2), EPS);
    }

    #[test]
    fn test_perspective_shape() {
        let m = Mat4::perspective(60f32.to_radians(), 16.0 / 9.0, 0.1, 200.0);

        // row 3 is exactly (0, 0, -1, 0)
        assert_vec4_near(Vec4::new(0.0, 0.0, -1.0, 0.0), m.row(3), 0.0);
        // depth terms are negative for z_near < z_far
        assert!(m[(2, 2)] < 0.0);
        assert!(m[(2, 3)] < 0.0);
        // no off-axis terms
        assert_near(0.0, m[(0, 1)], 0.0);
        assert_near(0.0, m[(0, 3)], 0.0);
        assert_near(0.0, m[(1, 3)], 0.0);
    }

    #[test]
    fn test_transpose_involution() {
        let m = Mat4::look_at(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.0, 0.5),
            Vec3::UNIT_Y,
        );
        assert_mat4_near(m, m.transpose().transpose(), 0.0);
        assert_near(m[(0, 3)], m.transpose()[(3, 0)], 0.0);
    }

    #[test]
    fn test_invert_round_trip() {
        let m = Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0))
            * Mat4::from_rotation_y(0.6)
            * Mat4::from_nonuniform_scale(Vec3::new(2.0, 0.5, 1.5));
        let inv = m.invert().expect("non-singular");

        assert_mat4_near(Mat4::IDENTITY, m * inv, 1e-4);
        assert_mat4_near(m, inv.invert().expect("inverse of inverse"), 1e-4);

        let v = Vec4::new(0.7, -3.0, 2.0, 1.0);
        assert_vec4_near(v, inv * (m * v), 1e-4);
    }

    #[test]
    fn test_invert_random_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let t = Vec3::new(
                rng.random_range(-5.0..5.0),
                rng.random_range(-5.0..5.0),
                rng.random_range(-5.0..5.0),
            );
            let axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ) + Vec3::splat(1.5);
            let angle = rng.random_range(-3.0..3.0);
            let scale = Vec3::new(
                rng.random_range(0.2..3.0),
                rng.random_range(0.2..3.0),
                rng.random_range(0.2..3.0),
            );

            let m = Mat4::from_translation(t)
                * Mat4::from_axis_angle(axis, angle)
                * Mat4::from_nonuniform_scale(scale);
            let inv = m.invert().expect("built from invertible factors");
            assert_mat4_near(Mat4::IDENTITY, m * inv, 1e-3);
        }
    }

    #[test]
    fn test_singular_invert_fails() {
        let singular = Mat4::from_nonuniform_scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(singular.invert().is_none());
        assert_mat4_near(Mat4::IDENTITY, singular.inverted(), 0.0);
        assert!(Mat4::ZERO.invert().is_none());
        assert_near(0.0, Mat4::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_determinant_of_products() {
        // uniform scale leaves w untouched, so det = 2^3
        let m = Mat4::from_scale(2.0);
        assert_near(8.0, m.determinant(), EPS);

        let r = Mat4::from_axis_angle(Vec3::new(0.3, 1.0, -0.2), 0.8);
        assert_near(1.0, r.determinant(), EPS);
    }

    #[test]
    fn test_scalar_and_additive_ops() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_mat4_near(Mat4::ZERO, m - m, 0.0);
        assert_mat4_near(m * 2.0, 2.0 * m, 0.0);
        assert_mat4_near(m * 2.0, m + m, 0.0);
    }
}
