//! Rendering-backend boundary.
//!
//! Defines what the engine hands to a renderer (static attribute buffers,
//! per-frame uniforms, draw calls) and two backends that need no GPU.

/// The `RenderBackend` trait and the values that cross it.
pub mod backend;
/// Named `f32` vertex attribute streams.
pub mod buffers;
/// Recording and log-only backends.
pub mod recording;

pub use backend::{DrawCall, FrameUniforms, RenderBackend, Topology};
pub use buffers::{Attribute, AttributeBuffers};
pub use recording::{LogBackend, RecordedFrame, RecordingBackend};
