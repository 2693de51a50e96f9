use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Clip-space depth convention expected by the rendering backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL / WebGL convention, depth in `[-1, 1]`.
    #[default]
    NegativeOneToOne,
    /// wgpu / Vulkan / Metal convention, depth in `[0, 1]`.
    ZeroToOne,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection, zoom and spin parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Uniform scale applied to the galaxy before rotation.
    pub model_scale: f32,
    /// Fixed spin added to the rotation accumulator every frame (radians).
    pub spin_step: f32,
    /// Distance added or removed per zoom key press.
    pub zoom_step: f32,
    /// Closest (and default) camera distance.
    pub min_zoom: f32,
    /// Farthest camera distance.
    pub max_zoom: f32,
    /// Clip-space depth convention of the projection matrix.
    pub depth_range: DepthRange,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 1e-4,
            zfar: 1e4,
            model_scale: 0.5,
            spin_step: PI / 1000.0,
            zoom_step: 0.5,
            min_zoom: 0.0,
            max_zoom: 5.0,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}
