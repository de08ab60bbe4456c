//! Tuning configuration
//!
//! Explicit value objects passed into the camera, glow and scene
//! constructors. Defaults carry the tuning the reference scene shipped
//! with; embedders override fields as needed.

use crate::math::Vec3;

/// Free-fly camera limits and input response
#[derive(Clone, Copy, Debug)]
pub struct CameraConfig {
    /// Pitch clamp in degrees; kept strictly inside ±90° so the basis
    /// never degenerates.
    pub pitch_min_deg: f32,
    pub pitch_max_deg: f32,
    /// Field-of-view clamp in degrees
    pub fov_min_deg: f32,
    pub fov_max_deg: f32,
    /// Degrees of fov change per scroll-wheel step
    pub fov_wheel_step_deg: f32,
    /// Movement speed in world units per second
    pub move_speed: f32,
    /// Speed factor while sprinting
    pub sprint_multiplier: f32,
    /// Degrees of yaw/pitch per pixel of mouse travel
    pub mouse_sensitivity: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pitch_min_deg: -89.0,
            pitch_max_deg: 89.0,
            fov_min_deg: 20.0,
            fov_max_deg: 90.0,
            fov_wheel_step_deg: 2.0,
            move_speed: 5.0,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 0.12,
            z_near: 0.1,
            z_far: 200.0,
        }
    }
}

/// Screen-space glow tuning
///
/// Radius and intensity both follow `base / (a + b * view_z)` response
/// curves, clamped to their min/max, so halos shrink and dim with distance.
#[derive(Clone, Copy, Debug)]
pub struct GlowConfig {
    pub base_radius_px: f32,
    pub min_radius_px: f32,
    pub max_radius_px: f32,
    pub base_intensity: f32,
    pub min_intensity: f32,
    pub max_intensity: f32,
    pub radius_a: f32,
    pub radius_b: f32,
    pub intensity_c: f32,
    pub intensity_d: f32,
    /// Depth comparison slack absorbing the light marker's own geometry
    pub depth_eps: f32,
    /// Pixel offset of the four outer occlusion taps
    pub sample_offset_px: i32,
    /// Visibility at or below this suppresses the glow entirely
    pub visible_threshold: f32,
    /// NDC magnitude beyond which the light counts as off-screen
    pub ndc_cull: f32,
    /// Floor for view-space depth, avoiding division blow-up near the camera
    pub min_view_z: f32,
    /// Base glow tint, multiplied by the light color
    pub color: Vec3,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            base_radius_px: 90.0,
            min_radius_px: 25.0,
            max_radius_px: 160.0,
            base_intensity: 0.95,
            min_intensity: 0.15,
            max_intensity: 1.0,
            radius_a: 0.35,
            radius_b: 0.12,
            intensity_c: 0.60,
            intensity_d: 0.15,
            depth_eps: 0.0030,
            sample_offset_px: 4,
            visible_threshold: 0.01,
            ndc_cull: 1.2,
            min_view_z: 0.15,
            color: Vec3::new(1.0, 0.9, 0.55),
        }
    }
}

/// Per-object scene setup, parallel arrays validated at scene build
#[derive(Clone, Debug)]
pub struct ObjectConfig {
    pub colors: Vec<Vec3>,
    pub scales: Vec<f32>,
    pub spin_enabled: Vec<bool>,
    pub spin_axes: Vec<Vec3>,
    pub spin_speeds: Vec<f32>,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                Vec3::new(0.95, 0.35, 0.25),
                Vec3::new(0.25, 0.70, 0.95),
                Vec3::new(0.55, 0.95, 0.40),
                Vec3::new(0.95, 0.90, 0.30),
            ],
            scales: vec![0.9, 1.0, 1.0, 1.0],
            spin_enabled: vec![true, false, true, true],
            spin_axes: vec![Vec3::UNIT_Y, Vec3::UNIT_Y, Vec3::UNIT_Y, Vec3::UNIT_X],
            spin_speeds: vec![1.0, 0.0, 0.8, 1.6],
        }
    }
}

/// Two-light rig and object orbit tuning
#[derive(Clone, Copy, Debug)]
pub struct LightConfig {
    pub ellipse_a_center: Vec3,
    pub ellipse_a_radius_x: f32,
    pub ellipse_a_radius_z: f32,
    pub ellipse_b_center: Vec3,
    pub ellipse_b_radius_x: f32,
    pub ellipse_b_radius_z: f32,
    /// Barycenter weights; treated as opaque tunables, not physics
    pub mass_0: f32,
    pub mass_1: f32,
    pub angular_speed: f32,
    pub start_phase: f32,
    pub color_0: Vec3,
    pub color_1: Vec3,
    pub intensity_0: f32,
    pub intensity_1: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ellipse_a_center: Vec3::new(-2.5, 2.0, 0.0),
            ellipse_a_radius_x: 4.0,
            ellipse_a_radius_z: 2.5,
            ellipse_b_center: Vec3::new(2.5, 2.0, 0.0),
            ellipse_b_radius_x: 4.0,
            ellipse_b_radius_z: 2.5,
            mass_0: 1.0,
            mass_1: 1.0,
            angular_speed: 0.5,
            start_phase: 0.0,
            color_0: Vec3::new(1.0, 0.95, 0.8),
            color_1: Vec3::new(0.8, 0.9, 1.0),
            intensity_0: 1.0,
            intensity_1: 1.0,
        }
    }
}

/// Top-level scene tuning
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Radius of the object circle around the light barycenter
    pub objects_circle_radius: f32,
    /// Angular speed of the object orbit in radians per second
    pub objects_orbit_speed: f32,
    pub objects: ObjectConfig,
    pub lights: LightConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_circle_radius: 3.2,
            objects_orbit_speed: 0.25,
            objects: ObjectConfig::default(),
            lights: LightConfig::default(),
        }
    }
}
