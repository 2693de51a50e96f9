//! Frame schedulers for [`SceneEngine::run`](super::SceneEngine::run).
//!
//! A windowed host paces frames with redraw requests and never needs a
//! scheduler; these exist for headless runs and tests.

use crate::util::frame_timing::FrameTiming;

/// Decides when the next frame runs and when the loop stops.
pub trait Scheduler {
    /// Block until the next frame is due. Returns `false` to stop the loop.
    fn next_frame(&mut self) -> bool;

    /// Called after each frame completes.
    fn frame_done(&mut self) {}
}

/// Runs an exact number of frames back to back.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    /// Schedule `count` frames.
    #[must_use]
    pub fn new(count: u64) -> Self {
        Self { remaining: count }
    }
}

impl Scheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Sleeps between frames to hold a target frame rate, optionally stopping
/// after a frame limit.
#[derive(Debug, Clone)]
pub struct PacedScheduler {
    timing: FrameTiming,
    limit: Option<u64>,
    started: u64,
}

impl PacedScheduler {
    /// Pace at `target_fps` (0 = as fast as possible) with no frame limit.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            timing: FrameTiming::new(target_fps),
            limit: None,
            started: 0,
        }
    }

    /// Stop after `frames` frames.
    #[must_use]
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    /// Measured frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}

impl Scheduler for PacedScheduler {
    fn next_frame(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.started >= limit) {
            return false;
        }
        if !self.timing.should_render() {
            std::thread::sleep(self.timing.remaining());
        }
        self.started += 1;
        true
    }

    fn frame_done(&mut self) {
        self.timing.end_frame();
    }
}
