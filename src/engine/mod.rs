//! The per-frame animation loop.
//!
//! [`SceneEngine`] owns everything one scene needs: the animation state,
//! the input processor, a queue of pending window events and the static
//! scene content. Each call to [`SceneEngine::frame`] drains the queue,
//! advances the camera, derives every drawable's matrix and hands the
//! result to a [`RenderBackend`](crate::gpu::RenderBackend).

pub mod command;
mod frame;
mod input;
mod scheduler;

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

pub use command::SceneCommand;
pub use input::InputSender;
pub use scheduler::{FixedFrames, PacedScheduler, Scheduler};

use crate::animation::AnimationState;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{PointCloud, SceneKind, TransformComposer};
use crate::util::frame_timing::FrameTiming;

/// Frames between FPS reports.
const FPS_REPORT_INTERVAL: u64 = 120;

/// One running scene: state, input and the frame step.
///
/// # Frame loop
///
/// Forward window events with [`push_event`](Self::push_event) (or from
/// another thread through an [`InputSender`]), call
/// [`resize`](Self::resize) when the canvas changes and
/// [`frame`](Self::frame) once per redraw. [`run`](Self::run) drives the
/// same step from a [`Scheduler`].
///
/// ```
/// use starbot::engine::SceneEngine;
/// use starbot::gpu::RecordingBackend;
/// use starbot::input::InputEvent;
/// use starbot::options::Options;
/// use starbot::scene::SceneKind;
///
/// let mut engine = SceneEngine::new(SceneKind::Robot, Options::default());
/// let mut backend = RecordingBackend::new();
/// engine.push_event(InputEvent::key_down("KeyJ"));
/// engine.frame(&mut backend).unwrap();
/// assert_eq!(engine.state().pose.jump_offset, 1.5);
/// assert_eq!(backend.last_frame().unwrap().draws.len(), 8);
/// ```
#[derive(Debug)]
pub struct SceneEngine {
    kind: SceneKind,
    options: Options,
    state: AnimationState,
    input: InputProcessor,
    /// Events waiting for the next frame.
    queue: VecDeque<InputEvent>,
    /// Events sent from other threads.
    inbox: Receiver<InputEvent>,
    sender: InputSender,
    /// Galaxy content; `None` in the robot scene.
    cloud: Option<PointCloud>,
    composer: TransformComposer,
    frame_timing: FrameTiming,
    frame_count: u64,
    uploaded: bool,
    viewport: (u32, u32),
    /// Physical pixels per logical pixel.
    scale_factor: f64,
}

// =============================================================================
// Construction & accessors
// =============================================================================

impl SceneEngine {
    /// Build a scene with default state. The galaxy generates its point
    /// cloud here.
    #[must_use]
    pub fn new(kind: SceneKind, options: Options) -> Self {
        let cloud = match kind {
            SceneKind::Galaxy => Some(PointCloud::generate_seeded(
                options.galaxy.star_count,
                options.galaxy.seed,
            )),
            SceneKind::Robot => None,
        };
        let (tx, inbox) = mpsc::channel();
        log::info!("Created {kind} scene");

        Self {
            kind,
            state: AnimationState::new(&options),
            input: InputProcessor::new(kind, &options),
            queue: VecDeque::new(),
            inbox,
            sender: InputSender::new(tx),
            cloud,
            composer: TransformComposer::default(),
            frame_timing: FrameTiming::new(options.display.target_fps),
            frame_count: 0,
            uploaded: false,
            viewport: (0, 0),
            scale_factor: 1.0,
            options,
        }
    }

    /// Which scene this engine runs.
    #[must_use]
    pub fn scene(&self) -> SceneKind {
        self.kind
    }

    /// Options the scene was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// The galaxy's point cloud (`None` for the robot).
    #[must_use]
    pub fn point_cloud(&self) -> Option<&PointCloud> {
        self.cloud.as_ref()
    }

    /// The input processor, e.g. for rebinding keys.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Canvas size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Physical pixels per logical pixel.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Track a new canvas size in physical pixels: updates the projection
    /// aspect and the logical width used by the pointer edge rule.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.state.camera.resize(width, height);
        self.input.set_viewport_width(self.logical_width());
        log::debug!("Viewport resized to {width}x{height}");
    }

    /// Track the display's scale factor. Pointer positions pushed with
    /// [`push_event`](Self::push_event) are expected in logical pixels.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
            self.input.set_viewport_width(self.logical_width());
        }
    }

    fn logical_width(&self) -> f32 {
        (f64::from(self.viewport.0) / self.scale_factor) as f32
    }
}
