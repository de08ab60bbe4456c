pub mod camera_utils;
pub mod fly_camera;

// Re-export main types
pub use camera_utils::CameraUniform;
pub use fly_camera::{FlyCamera, MoveInput};

use crate::math::Mat4;

pub trait Camera {
    fn view_matrix(&self) -> Mat4;
    fn projection_matrix(&self) -> Mat4;

    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
