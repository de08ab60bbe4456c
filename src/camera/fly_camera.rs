//! Free-fly (FPS-style) camera
//!
//! Yaw/pitch/fov live in degrees and are clamped on every update; the
//! forward/right/up basis is recomputed whenever yaw or pitch change, so
//! movement and view building always see fresh vectors. The caller owns
//! input decoding and hands over mouse deltas, zoom steps and per-frame
//! movement flags.

use crate::config::CameraConfig;
use crate::math::{Mat4, Vec3};

use super::Camera;

/// Movement flags for one frame, decoded from whatever input backend the
/// embedder uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
}

/// Free-fly camera with yaw/pitch mouse-look and flattened ground movement
#[derive(Clone, Debug)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Yaw in degrees, rotation about world Y
    yaw_deg: f32,
    /// Pitch in degrees, clamped strictly inside ±90°
    pitch_deg: f32,
    /// Vertical field of view in degrees, clamped to the configured range
    fov_deg: f32,
    aspect: f32,
    world_up: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    config: CameraConfig,
}

impl FlyCamera {
    /// Creates a camera at `position` with the given start angles; the
    /// basis is valid immediately.
    pub fn new(config: CameraConfig, position: Vec3, yaw_deg: f32, pitch_deg: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            yaw_deg,
            pitch_deg: pitch_deg.clamp(config.pitch_min_deg, config.pitch_max_deg),
            fov_deg: 60.0_f32.clamp(config.fov_min_deg, config.fov_max_deg),
            aspect,
            world_up: Vec3::UNIT_Y,
            forward: -Vec3::UNIT_Z,
            right: Vec3::UNIT_X,
            up: Vec3::UNIT_Y,
            config,
        };
        camera.update_basis();
        camera
    }

    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Recomputes forward/right/up from yaw and pitch.
    ///
    /// `forward = rotY(yaw) * (rotX(pitch) * (0, 0, -1, 0))`, then the
    /// right/up pair is rebuilt against world up. Pitch clamping keeps the
    /// cross products away from degeneracy.
    pub fn update_basis(&mut self) {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();

        let rot_y = Mat4::from_rotation_y(yaw);
        let rot_x = Mat4::from_rotation_x(pitch);
        let f4 = rot_y * (rot_x * (-Vec3::UNIT_Z).extend(0.0));

        self.forward = f4.truncate().normalized();
        self.right = self.forward.cross(self.world_up).normalized();
        self.up = self.right.cross(self.forward).normalized();
    }

    /// Mouse-look: applies pixel deltas scaled by sensitivity, clamps
    /// pitch, and refreshes the basis.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw_deg -= dx * self.config.mouse_sensitivity;
        self.pitch_deg = (self.pitch_deg - dy * self.config.mouse_sensitivity)
            .clamp(self.config.pitch_min_deg, self.config.pitch_max_deg);
        self.update_basis();
    }

    /// Scroll zoom: one step changes fov by the configured amount, within
    /// the configured bounds.
    pub fn apply_zoom(&mut self, steps: f32) {
        self.fov_deg = (self.fov_deg - steps * self.config.fov_wheel_step_deg)
            .clamp(self.config.fov_min_deg, self.config.fov_max_deg);
    }

    /// Applies one frame of movement.
    ///
    /// Ground movement runs on the Y-flattened forward vector so looking
    /// up or down never changes ground speed; when the camera looks
    /// straight along world up the flattened vector degenerates and
    /// `-UNIT_Z` stands in. Vertical movement rides world up directly.
    pub fn apply_movement(&mut self, input: MoveInput, dt: f32) {
        let mut speed = self.config.move_speed * dt;
        if input.sprint {
            speed *= self.config.sprint_multiplier;
        }

        let mut flat = Vec3::new(self.forward.x, 0.0, self.forward.z);
        if flat.length_squared() > 1e-8 {
            flat.normalize();
        } else {
            flat = -Vec3::UNIT_Z;
        }
        let right = flat.cross(self.world_up).normalized();

        if input.forward {
            self.position += flat * speed;
        }
        if input.backward {
            self.position -= flat * speed;
        }
        if input.left {
            self.position -= right * speed;
        }
        if input.right {
            self.position += right * speed;
        }
        if input.up {
            self.position += self.world_up * speed;
        }
        if input.down {
            self.position -= self.world_up * speed;
        }
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Camera for FlyCamera {
    /// Inverse of the camera's world transform:
    /// `rotX(-pitch) * rotY(-yaw) * translation(-position)`
    fn view_matrix(&self) -> Mat4 {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();

        Mat4::from_rotation_x(-pitch)
            * Mat4::from_rotation_y(-yaw)
            * Mat4::from_translation(-self.position)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(
            self.fov_deg.to_radians(),
            self.aspect,
            self.config.z_near,
            self.config.z_far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_util::*;
    use crate::math::Vec4;

    fn camera() -> FlyCamera {
        FlyCamera::new(CameraConfig::default(), Vec3::new(0.0, 3.0, 9.0), 0.0, 0.0, 16.0 / 9.0)
    }

    #[test]
    fn test_default_basis_looks_down_negative_z() {
        let cam = camera();
        assert_vec3_near(-Vec3::UNIT_Z, cam.forward(), EPS);
        assert_vec3_near(Vec3::UNIT_X, cam.right(), EPS);
        assert_vec3_near(Vec3::UNIT_Y, cam.up(), EPS);
    }

    #[test]
    fn test_basis_stays_orthonormal_under_look() {
        let mut cam = camera();
        cam.apply_mouse_delta(137.0, -45.0);
        cam.apply_mouse_delta(-12.0, 350.0);

        let (f, r, u) = (cam.forward(), cam.right(), cam.up());
        assert_near(1.0, f.length(), EPS);
        assert_near(1.0, r.length(), EPS);
        assert_near(1.0, u.length(), EPS);
        assert_near(0.0, f.dot(r), EPS);
        assert_near(0.0, f.dot(u), EPS);
        assert_near(0.0, r.dot(u), EPS);
    }

    #[test]
    fn test_pitch_clamps_short_of_ninety() {
        let mut cam = camera();
        cam.apply_mouse_delta(0.0, -100000.0);
        assert!(cam.pitch_deg() <= 89.0);
        // basis must not degenerate even at the clamp
        assert_near(1.0, cam.right().length(), EPS);

        cam.apply_mouse_delta(0.0, 100000.0);
        assert!(cam.pitch_deg() >= -89.0);
        assert_near(1.0, cam.right().length(), EPS);
    }

    #[test]
    fn test_fov_clamps_to_configured_range() {
        let mut cam = camera();
        cam.apply_zoom(1000.0);
        assert_near(20.0, cam.fov_deg(), 0.0);
        cam.apply_zoom(-1000.0);
        assert_near(90.0, cam.fov_deg(), 0.0);
    }

    #[test]
    fn test_view_matrix_maps_position_to_origin() {
        let mut cam = camera();
        cam.apply_mouse_delta(250.0, -80.0);
        let mapped = cam.view_matrix() * cam.position.extend(1.0);
        assert_vec4_near(Vec4::UNIT_W, mapped, 1e-4);
    }

    #[test]
    fn test_view_matrix_matches_look_at_along_forward() {
        let mut cam = camera();
        cam.apply_mouse_delta(90.0, -30.0);

        let view = cam.view_matrix();
        let look = Mat4::look_at(cam.position, cam.position + cam.forward(), Vec3::UNIT_Y);
        let p = Vec4::new(1.0, -2.0, 4.0, 1.0);
        assert_vec4_near(look * p, view * p, 1e-4);
    }

    #[test]
    fn test_projection_row_three() {
        let cam = camera();
        let proj = cam.projection_matrix();
        assert_vec4_near(Vec4::new(0.0, 0.0, -1.0, 0.0), proj.row(3), 0.0);
    }

    #[test]
    fn test_ground_movement_ignores_pitch() {
        let mut level = camera();
        let mut tilted = camera();
        tilted.apply_mouse_delta(0.0, -400.0); // look up steeply

        let input = MoveInput {
            forward: true,
            ..Default::default()
        };
        level.apply_movement(input, 1.0);
        tilted.apply_movement(input, 1.0);

        // identical ground displacement regardless of pitch
        let a = level.position;
        let b = tilted.position;
        assert_vec3_near(a, b, EPS);
        assert_near(3.0, a.y, EPS); // no vertical drift
    }

    #[test]
    fn test_vertical_movement_rides_world_up() {
        let mut cam = camera();
        cam.apply_mouse_delta(123.0, -40.0);
        let before = cam.position;
        cam.apply_movement(
            MoveInput {
                up: true,
                ..Default::default()
            },
            2.0,
        );
        assert_vec3_near(before + Vec3::UNIT_Y * 10.0, cam.position, EPS);
    }

    #[test]
    fn test_sprint_multiplies_speed() {
        let mut walk = camera();
        let mut sprint = camera();
        let base = MoveInput {
            forward: true,
            ..Default::default()
        };
        walk.apply_movement(base, 1.0);
        sprint.apply_movement(
            MoveInput {
                sprint: true,
                ..base
            },
            1.0,
        );

        let walked = (walk.position - Vec3::new(0.0, 3.0, 9.0)).length();
        let sprinted = (sprint.position - Vec3::new(0.0, 3.0, 9.0)).length();
        assert_near(2.0 * walked, sprinted, EPS);
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut cam = camera();
        cam.resize(800, 800);
        let square = cam.projection_matrix();
        assert_near(square[(0, 0)], square[(1, 1)], EPS);

        cam.resize(1600, 800);
        let wide = cam.projection_matrix();
        assert_near(square[(1, 1)], wide[(1, 1)], EPS);
        assert_near(wide[(1, 1)] / 2.0, wide[(0, 0)], EPS);

        // zero height is ignored rather than poisoning the aspect
        cam.resize(1600, 0);
        assert_near(wide[(0, 0)], cam.projection_matrix()[(0, 0)], 0.0);
    }
}
