//! Scene objects
//!
//! An object is pure value state: a handle to externally owned mesh data,
//! a color, a position on the orbit circle, and an optional spin. The
//! model matrix composes translation, a facing rotation towards the light
//! barycenter, the spin, and uniform scale, in that order.

use crate::math::{Mat4, Vec3};

/// Handle to a mesh owned by the embedder's geometry layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Continuous rotation about a fixed axis
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    pub axis: Vec3,
    /// Radians per second
    pub speed: f32,
}

/// One renderable object in the scene
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub mesh: MeshId,
    pub color: Vec3,
    /// Orbit position, rewritten every update
    pub base_position: Vec3,
    pub scale: f32,
    pub spin: Option<Spin>,
}

impl SceneObject {
    /// Model matrix for the current frame:
    /// `translation * rot_y(yaw to barycenter) * spin * scale`.
    pub fn model_matrix(&self, barycenter: Vec3, time: f32) -> Mat4 {
        let to_center = barycenter - self.base_position;
        let yaw_to_center = to_center.x.atan2(to_center.z);

        let spin = match self.spin {
            Some(spin) => Mat4::from_axis_angle(spin.axis.normalized(), time * spin.speed),
            None => Mat4::IDENTITY,
        };

        Mat4::from_translation(self.base_position)
            * Mat4::from_rotation_y(yaw_to_center)
            * spin
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_util::*;
    use crate::math::Vec4;

    fn object(spin: Option<Spin>) -> SceneObject {
        SceneObject {
            mesh: MeshId(0),
            color: Vec3::ONE,
            base_position: Vec3::new(3.0, 0.0, 0.0),
            scale: 2.0,
            spin,
        }
    }

    #[test]
    fn test_model_matrix_places_origin_at_base_position() {
        let obj = object(None);
        let m = obj.model_matrix(Vec3::ZERO, 0.0);
        let origin = m * Vec4::UNIT_W;
        assert_vec4_near(obj.base_position.extend(1.0), origin, EPS);
    }

    #[test]
    fn test_model_matrix_applies_uniform_scale() {
        let obj = object(None);
        let m = obj.model_matrix(Vec3::ZERO, 0.0);
        // directions pick up scale but not translation or much else
        let d = m * Vec3::UNIT_Y.extend(0.0);
        assert_near(2.0, d.truncate().length(), EPS);
    }

    #[test]
    fn test_facing_rotation_points_local_z_at_barycenter() {
        let obj = object(None);
        // barycenter at the origin, object on +X: local +Z should rotate
        // to face -X (towards the center), scaled by 2
        let m = obj.model_matrix(Vec3::ZERO, 0.0);
        let facing = (m * Vec3::UNIT_Z.extend(0.0)).truncate().normalized();
        assert_vec3_near(-Vec3::UNIT_X, facing, EPS);
    }

    #[test]
    fn test_spin_advances_with_time() {
        let spin = Some(Spin {
            axis: Vec3::new(0.0, 4.0, 0.0), // normalized inside
            speed: 0.5,
        });
        let obj = object(spin);

        let at_zero = obj.model_matrix(Vec3::ZERO, 0.0);
        let expected_half_turn = obj.model_matrix(Vec3::ZERO, std::f32::consts::PI * 2.0);

        // time 0 matches the unspun matrix
        assert_mat4_near(object(None).model_matrix(Vec3::ZERO, 0.0), at_zero, EPS);
        // a full pi of spin flips local X
        let v = Vec3::UNIT_X.extend(0.0);
        let unspun = at_zero * v;
        let spun = expected_half_turn * v;
        assert_vec4_near(-unspun, spun, 1e-4);
    }
}
