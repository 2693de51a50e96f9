use glam::Mat4;

use crate::options::DepthRange;

/// Perspective projection defined by field of view and clip planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Clip-space depth convention.
    pub depth_range: DepthRange,
}

impl Perspective {
    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        let fovy = self.fovy.to_radians();
        match self.depth_range {
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(fovy, self.aspect, self.znear, self.zfar)
            }
            DepthRange::ZeroToOne => {
                Mat4::perspective_rh(fovy, self.aspect, self.znear, self.zfar)
            }
        }
    }
}

/// Axis-aligned orthographic box centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Half-extent of the box on every axis.
    pub extent: f32,
    /// Clip-space depth convention.
    pub depth_range: DepthRange,
}

impl Orthographic {
    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        let e = self.extent;
        match self.depth_range {
            DepthRange::NegativeOneToOne => {
                Mat4::orthographic_rh_gl(-e, e, -e, e, -e, e)
            }
            DepthRange::ZeroToOne => Mat4::orthographic_rh(-e, e, -e, e, -e, e),
        }
    }
}

/// View, projection and model matrices for one frame of the galaxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
    /// Static scale plus spin of the star field.
    pub model: Mat4,
}

impl CameraMatrices {
    /// `projection · (view · model)`, the single matrix the galaxy shader
    /// receives.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.projection * (self.view * self.model)
    }
}
