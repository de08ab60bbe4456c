//! Linear-algebra kernel
//!
//! Self-contained vector / matrix / quaternion types used by every transform
//! in the crate. Matrices are stored column-major (the layout OpenGL-style
//! APIs expect from `to_cols_array`) but every algorithm is written against
//! the `(row, col)` indexing contract, so the math reads independently of
//! storage order.
//!
//! Numerical degeneracies are not errors here: normalizing a near-zero
//! vector yields the zero vector, inverting a near-singular matrix yields
//! `None`, and a near-zero quaternion normalizes to identity. Out-of-range
//! indexing panics, matching `std` slice behaviour.

pub mod mat3;
pub mod mat4;
pub mod quat;
pub mod vec;
pub mod veci;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec::{Vec2, Vec3, Vec4};
pub use veci::{Vec2i, Vec3i, Vec4i};
