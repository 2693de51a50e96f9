//! Frame step for SceneEngine

use super::scheduler::Scheduler;
use super::{SceneEngine, FPS_REPORT_INTERVAL};
use crate::camera::Orthographic;
use crate::error::StarbotError;
use crate::gpu::{DrawCall, FrameUniforms, RenderBackend, Topology};
use crate::scene::mesh_gen::{self, CUBE_VERTEX_COUNT};
use crate::scene::{PointCloud, SceneKind};

impl SceneEngine {
    /// Render one frame.
    ///
    /// In order: upload static buffers (first frame only), apply queued
    /// input, advance the camera one step, derive each drawable's matrix
    /// and submit the draws.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports; the engine's own state has
    /// already advanced by then.
    pub fn frame(&mut self, backend: &mut dyn RenderBackend) -> Result<(), StarbotError> {
        if !self.uploaded {
            let buffers = match &self.cloud {
                Some(cloud) => mesh_gen::galaxy_buffers(cloud),
                None => mesh_gen::robot_buffers(),
            };
            backend.upload(&buffers)?;
            self.uploaded = true;
        }

        let applied = self.drain_input();
        if applied > 0 {
            log::trace!(
                "{} frame {}: applied {applied} commands",
                self.kind,
                self.frame_count
            );
        }
        let _ = self.state.camera.advance();

        match self.kind {
            SceneKind::Galaxy => self.draw_galaxy(backend)?,
            SceneKind::Robot => self.draw_robot(backend)?,
        }
        backend.end_frame()?;

        self.frame_timing.end_frame();
        self.frame_count += 1;
        if self.frame_count % FPS_REPORT_INTERVAL == 0 {
            log::debug!(
                "{} frame {}: {:.1} fps",
                self.kind,
                self.frame_count,
                self.frame_timing.fps()
            );
        }
        Ok(())
    }

    /// Drive [`frame`](Self::frame) until the scheduler stops. Returns the
    /// number of frames rendered.
    ///
    /// # Errors
    ///
    /// Stops at the first backend error.
    pub fn run(
        &mut self,
        scheduler: &mut dyn Scheduler,
        backend: &mut dyn RenderBackend,
    ) -> Result<u64, StarbotError> {
        let mut frames = 0;
        while scheduler.next_frame() {
            self.frame(backend)?;
            scheduler.frame_done();
            frames += 1;
        }
        Ok(frames)
    }

    /// One point draw with the full projection × view × model matrix.
    fn draw_galaxy(&self, backend: &mut dyn RenderBackend) -> Result<(), StarbotError> {
        backend.begin_frame(&FrameUniforms {
            clear_color: self.options.display.galaxy_clear,
            projection: None,
        })?;

        let count = self.cloud.as_ref().map_or(0, PointCloud::len);
        if count == 0 {
            return Ok(());
        }
        backend.draw(&DrawCall {
            uniform: "transformMatrix",
            transform: self.state.camera.matrices().transform(),
            topology: Topology::Points,
            vertex_count: count,
        })
    }

    /// One cube draw per body part under an orthographic projection.
    fn draw_robot(&self, backend: &mut dyn RenderBackend) -> Result<(), StarbotError> {
        let projection = Orthographic {
            extent: self.options.robot.ortho_extent,
            depth_range: self.options.camera.depth_range,
        }
        .build_projection();
        backend.begin_frame(&FrameUniforms {
            clear_color: self.options.display.robot_clear,
            projection: Some(projection),
        })?;

        for (_, transform) in self.composer.draw_list(&self.state.pose) {
            backend.draw(&DrawCall {
                uniform: "modelViewMatrix",
                transform,
                topology: Topology::Triangles,
                vertex_count: CUBE_VERTEX_COUNT,
            })?;
        }
        Ok(())
    }
}
