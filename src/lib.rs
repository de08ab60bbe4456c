// src/lib.rs
//! Glimmer Scene Core
//!
//! CPU-side core of a small forward renderer: a self-contained math
//! kernel, a free-fly camera, a depth-probed light glow pass and a scene
//! of objects orbiting a two-light barycenter. The embedder owns the GPU
//! and window layer; this crate hands it matrices, uniforms and glow
//! parameters.

pub mod camera;
pub mod config;
pub mod glow;
pub mod math;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use camera::FlyCamera;
pub use scene::Scene;

/// Installs the env-filtered logger (`RUST_LOG`) for embedders that don't
/// bring their own. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
