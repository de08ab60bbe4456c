//! Integer vector types: [`Vec2i`], [`Vec3i`], [`Vec4i`]
//!
//! i32 counterparts of the float vectors, used for pixel coordinates and
//! viewport sizes. Length is reported as `f64` since the squared length is
//! exact in integers.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// 2D integer vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i::new(0, 0);
    pub const ONE: Vec2i = Vec2i::new(1, 1);
    pub const UNIT_X: Vec2i = Vec2i::new(1, 0);
    pub const UNIT_Y: Vec2i = Vec2i::new(0, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f64 {
        f64::from(self.length_squared()).sqrt()
    }
}

impl Index<usize> for Vec2i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2i index must be 0 or 1, got {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2i {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2i index must be 0 or 1, got {index}"),
        }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Vec2i {
        Vec2i::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, s: i32) -> Vec2i {
        Vec2i::new(self.x * s, self.y * s)
    }
}

impl Mul<Vec2i> for i32 {
    type Output = Vec2i;

    fn mul(self, v: Vec2i) -> Vec2i {
        v * self
    }
}

impl Div<i32> for Vec2i {
    type Output = Vec2i;

    fn div(self, s: i32) -> Vec2i {
        Vec2i::new(self.x / s, self.y / s)
    }
}

/// 3D integer vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Vec3i = Vec3i::new(0, 0, 0);
    pub const ONE: Vec3i = Vec3i::new(1, 1, 1);
    pub const UNIT_X: Vec3i = Vec3i::new(1, 0, 0);
    pub const UNIT_Y: Vec3i = Vec3i::new(0, 1, 0);
    pub const UNIT_Z: Vec3i = Vec3i::new(0, 0, 1);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(self) -> f64 {
        f64::from(self.length_squared()).sqrt()
    }
}

impl Index<usize> for Vec3i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3i index must be 0, 1 or 2, got {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3i {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3i index must be 0, 1 or 2, got {index}"),
        }
    }
}

impl Add for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3i {
    type Output = Vec3i;

    fn neg(self) -> Vec3i {
        Vec3i::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, s: i32) -> Vec3i {
        Vec3i::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3i> for i32 {
    type Output = Vec3i;

    fn mul(self, v: Vec3i) -> Vec3i {
        v * self
    }
}

impl Div<i32> for Vec3i {
    type Output = Vec3i;

    fn div(self, s: i32) -> Vec3i {
        Vec3i::new(self.x / s, self.y / s, self.z / s)
    }
}

/// 4D integer vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec4i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Vec4i {
    pub const ZERO: Vec4i = Vec4i::new(0, 0, 0, 0);
    pub const ONE: Vec4i = Vec4i::new(1, 1, 1, 1);

    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn length(self) -> f64 {
        f64::from(self.length_squared()).sqrt()
    }
}

impl Index<usize> for Vec4i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4i index must be in 0..4, got {index}"),
        }
    }
}

impl IndexMut<usize> for Vec4i {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4i index must be in 0..4, got {index}"),
        }
    }
}

impl Add for Vec4i {
    type Output = Vec4i;

    fn add(self, rhs: Vec4i) -> Vec4i {
        Vec4i::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4i {
    type Output = Vec4i;

    fn sub(self, rhs: Vec4i) -> Vec4i {
        Vec4i::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Vec4i {
    type Output = Vec4i;

    fn neg(self) -> Vec4i {
        Vec4i::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<i32> for Vec4i {
    type Output = Vec4i;

    fn mul(self, s: i32) -> Vec4i {
        Vec4i::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Vec4i> for i32 {
    type Output = Vec4i;

    fn mul(self, v: Vec4i) -> Vec4i {
        v * self
    }
}

impl Div<i32> for Vec4i {
    type Output = Vec4i;

    fn div(self, s: i32) -> Vec4i {
        Vec4i::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}
