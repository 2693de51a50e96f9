//! The rendering-backend boundary.
//!
//! The engine derives matrices and hands them over through
//! [`RenderBackend`]; context acquisition, shader linking and buffer
//! binding live entirely on the other side of this trait.

use glam::Mat4;

use super::buffers::AttributeBuffers;
use crate::error::StarbotError;

/// Primitive topology of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// One point sprite per vertex.
    Points,
    /// Independent triangles, three vertices each.
    Triangles,
}

/// Per-frame values set before any draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    /// `projectionMatrix` uniform, when the scene uses a separate one.
    pub projection: Option<Mat4>,
}

/// One draw call: a matrix uniform plus a slice of the uploaded buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Name of the matrix uniform (`transformMatrix` or `modelViewMatrix`).
    pub uniform: &'static str,
    /// Value for that uniform.
    pub transform: Mat4,
    /// Primitive topology.
    pub topology: Topology,
    /// Number of vertices to draw from the start of the buffers.
    pub vertex_count: usize,
}

/// Consumer of the matrices and static buffers the engine produces.
///
/// Call order per scene: `upload` once, then for every frame
/// `begin_frame`, any number of `draw`, and `end_frame`.
pub trait RenderBackend {
    /// Receive the static attribute buffers. Called once.
    fn upload(&mut self, buffers: &AttributeBuffers) -> Result<(), StarbotError>;

    /// Clear and set per-frame uniforms.
    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> Result<(), StarbotError>;

    /// Issue one draw.
    fn draw(&mut self, call: &DrawCall) -> Result<(), StarbotError>;

    /// Present the frame.
    fn end_frame(&mut self) -> Result<(), StarbotError>;
}
