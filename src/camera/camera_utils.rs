//! GPU-facing camera data
//!
//! The uniform layout handed to the embedder's shader pipeline. Matrices
//! flatten column-major so the bytes match what GL-style APIs expect with
//! `transpose = false`.

use crate::math::Mat4;

use super::fly_camera::FlyCamera;
use super::Camera;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl CameraUniform {
    /// Rebuilds the uniform from the camera's current state.
    pub fn update(&mut self, camera: &FlyCamera) {
        let p = camera.position;
        self.view_position = [p.x, p.y, p.z, 1.0];
        self.view_proj = camera.view_projection_matrix().to_cols_array_2d();
    }
}
