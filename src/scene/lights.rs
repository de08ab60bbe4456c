//! Two-light orbit rig
//!
//! Both point lights ride independent elliptical orbits in the XZ plane,
//! sharing one angular speed; light 0 runs half a turn ahead so the pair
//! starts on opposite sides. Their mass-weighted barycenter anchors both
//! the object orbit and object facing. The masses are opaque tunables,
//! not a physics simulation.

use crate::config::LightConfig;
use crate::math::Vec3;

/// Total mass below which the barycenter degrades to the midpoint.
const MASS_EPS: f32 = 1e-6;

/// The two scene lights and their orbit state
#[derive(Clone, Debug)]
pub struct LightRig {
    config: LightConfig,
    pos_0: Vec3,
    pos_1: Vec3,
}

impl LightRig {
    pub fn new(config: LightConfig) -> Self {
        let mut rig = Self {
            config,
            pos_0: Vec3::ZERO,
            pos_1: Vec3::ZERO,
        };
        rig.update(0.0);
        rig
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn position_0(&self) -> Vec3 {
        self.pos_0
    }

    pub fn position_1(&self) -> Vec3 {
        self.pos_1
    }

    /// Light color scaled by its intensity, ready for shading uniforms.
    pub fn shaded_color_0(&self) -> Vec3 {
        self.config.color_0 * self.config.intensity_0
    }

    pub fn shaded_color_1(&self) -> Vec3 {
        self.config.color_1 * self.config.intensity_1
    }

    /// Advances both orbits to absolute time `time` (seconds).
    pub fn update(&mut self, time: f32) {
        let cfg = &self.config;
        let phi = time * cfg.angular_speed + cfg.start_phase;

        // light 0 leads by half a turn so the pair starts opposed
        let a0 = phi + std::f32::consts::PI;
        let a1 = phi;

        self.pos_0 = cfg.ellipse_a_center
            + Vec3::new(
                a0.cos() * cfg.ellipse_a_radius_x,
                0.0,
                a0.sin() * cfg.ellipse_a_radius_z,
            );
        self.pos_1 = cfg.ellipse_b_center
            + Vec3::new(
                a1.cos() * cfg.ellipse_b_radius_x,
                0.0,
                a1.sin() * cfg.ellipse_b_radius_z,
            );
    }

    /// Mass-weighted average of the light positions; near-zero total mass
    /// falls back to the arithmetic midpoint.
    pub fn barycenter(&self) -> Vec3 {
        let m0 = self.config.mass_0;
        let m1 = self.config.mass_1;
        let denom = m0 + m1;

        if denom < MASS_EPS {
            return (self.pos_0 + self.pos_1) * 0.5;
        }
        (self.pos_0 * m0 + self.pos_1 * m1) / denom
    }
}
