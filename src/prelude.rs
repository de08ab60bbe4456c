//! # Glimmer Prelude
//!
//! Brings the commonly used types into scope in one import:
//!
//! ```rust
//! use glimmer::prelude::*;
//! ```

// Re-export camera types
pub use crate::camera::{Camera, CameraUniform, FlyCamera, MoveInput};

// Re-export configuration
pub use crate::config::{CameraConfig, GlowConfig, LightConfig, ObjectConfig, SceneConfig};

// Re-export the glow pass
pub use crate::glow::{DepthSource, GlowParams, GlowRenderer, GlowUniform};

// Re-export scene types
pub use crate::scene::{LightRig, MeshId, Scene, SceneError, SceneObject, Spin};

// Re-export the math kernel
pub use crate::math::{Mat3, Mat4, Quat, Vec2, Vec2i, Vec3, Vec3i, Vec4, Vec4i};
