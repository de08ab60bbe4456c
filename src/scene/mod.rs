//! Scene state and per-frame update
//!
//! Owns the object list and the light rig; the embedder owns meshes,
//! shaders and the frame loop. `update` is the single mutation point per
//! frame — afterwards the scene is read-only for the render pass.

pub mod lights;
pub mod object;

pub use lights::LightRig;
pub use object::{MeshId, SceneObject, Spin};

use thiserror::Error;

use crate::config::SceneConfig;
use crate::math::Vec3;

/// Fatal scene setup errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// The parallel per-object config arrays disagree about object count.
    #[error("object config array `{field}` has length {actual}, expected {expected} (one entry per mesh)")]
    ConfigLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Scene containing the orbiting objects and the two-light rig
#[derive(Clone, Debug)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: LightRig,
    objects_circle_radius: f32,
    objects_orbit_speed: f32,
    time: f32,
}

impl Scene {
    /// Builds the scene from config plus one mesh handle per object.
    ///
    /// The per-object config arrays must all match the mesh count; a
    /// mismatch is a setup bug and fails here rather than at render time.
    /// Objects start evenly spread on the orbit circle around the t = 0
    /// light barycenter.
    pub fn build(config: SceneConfig, meshes: Vec<MeshId>) -> Result<Self, SceneError> {
        let n = meshes.len();
        let objects_cfg = &config.objects;

        for (field, len) in [
            ("colors", objects_cfg.colors.len()),
            ("scales", objects_cfg.scales.len()),
            ("spin_enabled", objects_cfg.spin_enabled.len()),
            ("spin_axes", objects_cfg.spin_axes.len()),
            ("spin_speeds", objects_cfg.spin_speeds.len()),
        ] {
            if len != n {
                return Err(SceneError::ConfigLengthMismatch {
                    field,
                    expected: n,
                    actual: len,
                });
            }
        }

        let lights = LightRig::new(config.lights);
        let barycenter = lights.barycenter();
        let radius = config.objects_circle_radius;

        let objects = meshes
            .into_iter()
            .enumerate()
            .map(|(i, mesh)| {
                let angle = std::f32::consts::TAU * (i as f32 / n as f32);
                let spin = objects_cfg.spin_enabled[i].then(|| Spin {
                    axis: objects_cfg.spin_axes[i],
                    speed: objects_cfg.spin_speeds[i],
                });

                SceneObject {
                    mesh,
                    color: objects_cfg.colors[i],
                    base_position: barycenter
                        + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
                    scale: objects_cfg.scales[i],
                    spin,
                }
            })
            .collect();

        log::debug!("scene built: {n} objects on a {radius} unit circle");

        Ok(Self {
            objects,
            lights,
            objects_circle_radius: radius,
            objects_orbit_speed: config.objects_orbit_speed,
            time: 0.0,
        })
    }

    /// Elapsed scene time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advances the scene by `dt` seconds: lights first, then the object
    /// orbit around the fresh barycenter.
    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.lights.update(self.time);

        let barycenter = self.lights.barycenter();
        let radius = self.objects_circle_radius;
        let w = self.objects_orbit_speed;

        // phases spread evenly by index
        let n = self.objects.len();
        for (i, obj) in self.objects.iter_mut().enumerate() {
            let base_phase = std::f32::consts::TAU * (i as f32 / n as f32);
            let angle = base_phase + self.time * w;
            obj.base_position =
                barycenter + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
        }
    }
}
