//! Backends that never touch a GPU.
//!
//! [`RecordingBackend`] keeps every frame it is handed so tests and
//! headless tools can inspect the exact matrices the engine produced.
//! [`LogBackend`] only traces calls, which makes the binary runnable on a
//! machine with no graphics stack.

use super::backend::{DrawCall, FrameUniforms, RenderBackend};
use super::buffers::AttributeBuffers;
use crate::error::StarbotError;

/// Everything submitted between one `begin_frame` and `end_frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    /// Uniforms passed to `begin_frame`.
    pub uniforms: FrameUniforms,
    /// Draws in submission order.
    pub draws: Vec<DrawCall>,
}

/// In-memory backend that records uploads and frames.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    uploads: Vec<AttributeBuffers>,
    frames: Vec<RecordedFrame>,
    open: Option<RecordedFrame>,
}

impl RecordingBackend {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers uploaded so far.
    #[must_use]
    pub fn uploads(&self) -> &[AttributeBuffers] {
        &self.uploads
    }

    /// Completed frames.
    #[must_use]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// The most recently completed frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl RenderBackend for RecordingBackend {
    fn upload(&mut self, buffers: &AttributeBuffers) -> Result<(), StarbotError> {
        self.uploads.push(buffers.clone());
        Ok(())
    }

    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> Result<(), StarbotError> {
        if self.open.is_some() {
            return Err(StarbotError::Backend(
                "begin_frame called twice without end_frame".into(),
            ));
        }
        self.open = Some(RecordedFrame {
            uniforms: *uniforms,
            draws: Vec::new(),
        });
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> Result<(), StarbotError> {
        let frame = self
            .open
            .as_mut()
            .ok_or_else(|| StarbotError::Backend("draw outside a frame".into()))?;
        frame.draws.push(*call);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), StarbotError> {
        let frame = self
            .open
            .take()
            .ok_or_else(|| StarbotError::Backend("end_frame without begin_frame".into()))?;
        self.frames.push(frame);
        Ok(())
    }
}

/// Backend that traces every call through `log` and draws nothing.
#[derive(Debug, Default)]
pub struct LogBackend {
    draws: u64,
}

impl LogBackend {
    /// New tracing backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw calls seen.
    #[must_use]
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl RenderBackend for LogBackend {
    fn upload(&mut self, buffers: &AttributeBuffers) -> Result<(), StarbotError> {
        for attr in buffers.iter() {
            log::debug!(
                "upload {}: {} vertices x {} ({} bytes)",
                attr.name,
                attr.vertex_count(),
                attr.components,
                attr.as_bytes().len()
            );
        }
        Ok(())
    }

    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> Result<(), StarbotError> {
        log::trace!(
            "begin_frame clear={:?} projection={}",
            uniforms.clear_color,
            uniforms.projection.is_some()
        );
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> Result<(), StarbotError> {
        self.draws += 1;
        log::trace!(
            "draw {:?} x{} {}={:?}",
            call.topology,
            call.vertex_count,
            call.uniform,
            call.transform.w_axis
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), StarbotError> {
        log::trace!("end_frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::gpu::backend::Topology;

    fn call() -> DrawCall {
        DrawCall {
            uniform: "modelViewMatrix",
            transform: Mat4::IDENTITY,
            topology: Topology::Triangles,
            vertex_count: 36,
        }
    }

    fn uniforms() -> FrameUniforms {
        FrameUniforms {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            projection: None,
        }
    }

    #[test]
    fn records_draws_per_frame() {
        let mut backend = RecordingBackend::new();
        backend.begin_frame(&uniforms()).unwrap();
        backend.draw(&call()).unwrap();
        backend.draw(&call()).unwrap();
        backend.end_frame().unwrap();

        assert_eq!(backend.frames().len(), 1);
        assert_eq!(backend.last_frame().unwrap().draws.len(), 2);
    }

    #[test]
    fn rejects_out_of_order_calls() {
        let mut backend = RecordingBackend::new();
        assert!(backend.draw(&call()).is_err());
        assert!(backend.end_frame().is_err());
        backend.begin_frame(&uniforms()).unwrap();
        assert!(backend.begin_frame(&uniforms()).is_err());
    }

    #[test]
    fn log_backend_counts_draws() {
        let mut backend = LogBackend::new();
        backend.begin_frame(&uniforms()).unwrap();
        for _ in 0..8 {
            backend.draw(&call()).unwrap();
        }
        backend.end_frame().unwrap();
        assert_eq!(backend.draw_count(), 8);
    }
}
