//! Screen-space light glow
//!
//! Decides per light, per frame, whether a soft halo should be drawn and
//! with what parameters. Occlusion is estimated from a handful of depth
//! taps around the light's projected pixel instead of a shadow map: the
//! five taps (center plus one offset along each screen axis) are read as a
//! single block, compared against the light's own depth, and the passing
//! fraction scales the halo intensity.
//!
//! The actual overlay draw is the embedder's job; this module only
//! computes [`GlowParams`]. Every skip path returns `None` without
//! touching any state, so callers can run it unconditionally for every
//! light every frame.

use crate::config::GlowConfig;
use crate::math::{Mat4, Vec2, Vec2i, Vec3};

/// Clip-space w at or below which the light counts as behind the camera.
const CLIP_W_EPS: f32 = 1e-4;

/// Depth readback seam.
///
/// Implementations read back a rectangular region of the current frame's
/// depth buffer as floats in [0, 1], row-major, bottom row first (the
/// region is always clamped to the viewport before the call). The snapshot
/// must come from after the opaque geometry pass, else occlusion results
/// are stale.
pub trait DepthSource {
    fn read_depth_block(&mut self, x0: i32, y0: i32, width: i32, height: i32, dst: &mut [f32]);
}

/// Draw parameters for one light's halo overlay
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowParams {
    /// Projected light position in pixels
    pub screen_px: Vec2,
    /// Halo radius in pixels
    pub radius_px: f32,
    /// Halo color (glow tint × light color)
    pub color: Vec3,
    /// Final intensity, already scaled by occlusion visibility
    pub intensity: f32,
}

/// GPU-ready form of [`GlowParams`]
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct GlowUniform {
    pub light_screen_px: [f32; 2],
    pub radius_px: f32,
    pub intensity: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl From<GlowParams> for GlowUniform {
    fn from(p: GlowParams) -> Self {
        Self {
            light_screen_px: [p.screen_px.x, p.screen_px.y],
            radius_px: p.radius_px,
            intensity: p.intensity,
            color: [p.color.x, p.color.y, p.color.z],
            _pad: 0.0,
        }
    }
}

/// Per-light glow evaluation with a reusable depth scratch block
pub struct GlowRenderer {
    config: GlowConfig,
    depth_block: Vec<f32>,
}

impl GlowRenderer {
    pub fn new(config: GlowConfig) -> Self {
        let size = (2 * config.sample_offset_px + 1).max(1) as usize;
        Self {
            config,
            depth_block: vec![0.0; size * size],
        }
    }

    pub fn config(&self) -> &GlowConfig {
        &self.config
    }

    /// Evaluates one light against the current frame.
    ///
    /// Returns `None` when the light is behind the camera, culled off
    /// screen, or occluded below the visibility threshold; otherwise the
    /// halo parameters for the overlay draw. Only the `Some` path reads
    /// state beyond the depth buffer, and nothing is ever written.
    pub fn evaluate(
        &mut self,
        depth: &mut dyn DepthSource,
        view: Mat4,
        projection: Mat4,
        viewport: Vec2i,
        light_pos: Vec3,
        light_color: Vec3,
    ) -> Option<GlowParams> {
        let cfg = self.config;

        let clip = projection * (view * light_pos.extend(1.0));
        if clip.w <= CLIP_W_EPS {
            log::trace!("glow skipped: light behind camera (w = {})", clip.w);
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        if ndc.x < -cfg.ndc_cull || ndc.x > cfg.ndc_cull || ndc.y < -cfg.ndc_cull || ndc.y > cfg.ndc_cull
        {
            log::trace!("glow skipped: light off screen (ndc = {:?})", ndc);
            return None;
        }

        let px = (ndc.x * 0.5 + 0.5) * viewport.x as f32;
        let py = (ndc.y * 0.5 + 0.5) * viewport.y as f32;
        let light_depth01 = ndc.z * 0.5 + 0.5;

        let vis = self.visibility(depth, viewport, px, py, light_depth01);
        if vis <= cfg.visible_threshold {
            log::trace!("glow skipped: occluded (visibility = {vis})");
            return None;
        }

        let light_view = view * light_pos.extend(1.0);
        let view_z = cfg.min_view_z.max(-light_view.z);

        let radius_px = (cfg.base_radius_px / (cfg.radius_a + cfg.radius_b * view_z))
            .clamp(cfg.min_radius_px, cfg.max_radius_px);
        let intensity = (cfg.base_intensity / (cfg.intensity_c + cfg.intensity_d * view_z))
            .clamp(cfg.min_intensity, cfg.max_intensity)
            * vis;

        Some(GlowParams {
            screen_px: Vec2::new(px, py),
            radius_px,
            color: cfg.color.mul_elem(light_color),
            intensity,
        })
    }

    /// Fractional visibility of a depth value at a pixel: five taps against
    /// one block readback, each pass worth 0.2.
    ///
    /// A tap passes when `light_depth01 <= sample + depth_eps`; the epsilon
    /// absorbs self-occlusion from the light's own marker geometry. All
    /// taps clamp to the viewport, so edge lights reuse border samples.
    pub fn visibility(
        &mut self,
        depth: &mut dyn DepthSource,
        viewport: Vec2i,
        px: f32,
        py: f32,
        light_depth01: f32,
    ) -> f32 {
        let cfg = self.config;
        let o = cfg.sample_offset_px;

        let max_x = viewport.x - 1;
        let max_y = viewport.y - 1;

        let ix = (px as i32).clamp(0, max_x);
        let iy = (py as i32).clamp(0, max_y);

        let x0 = (ix - o).clamp(0, max_x);
        let y0 = (iy - o).clamp(0, max_y);
        let x1 = (ix + o).clamp(0, max_x);
        let y1 = (iy + o).clamp(0, max_y);

        let w = x1 - x0 + 1;
        let h = y1 - y0 + 1;

        let block = &mut self.depth_block[..(w * h) as usize];
        depth.read_depth_block(x0, y0, w, h, block);

        let sample = |sx: i32, sy: i32| -> f32 {
            let lx = sx.clamp(x0, x1) - x0;
            let ly = sy.clamp(y0, y1) - y0;
            block[(ly * w + lx) as usize]
        };

        let mut vis = 0.0;
        for (sx, sy) in [
            (ix, iy),
            (ix + o, iy),
            (ix - o, iy),
            (ix, iy + o),
            (ix, iy - o),
        ] {
            if light_depth01 <= sample(sx, sy) + cfg.depth_eps {
                vis += 1.0;
            }
        }

        vis * 0.2
    }
}
