//! Process-wide animation state for both scenes.
//!
//! Created once per scene with default values and mutated only by
//! [`AnimationState::apply`] (input commands) and the per-frame camera
//! advance. Everything else reads it.

use crate::camera::controller::CameraRig;
use crate::engine::command::SceneCommand;
use crate::options::Options;

/// Joint angles and toggles that pose the robot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotPose {
    /// Yaw of the whole body in degrees. Accumulates without bound.
    pub body_yaw: f32,
    /// Right-arm swing in degrees, either 0 or the configured wave angle.
    pub arm_angle: f32,
    /// Vertical lift of the whole figure, either 0 or the jump height.
    pub jump_offset: f32,
    /// Amount currently taken off the eye height (0 when open).
    eye_shrink: f32,
}

impl RobotPose {
    /// Add `degrees` of body yaw.
    pub fn turn(&mut self, degrees: f32) {
        self.body_yaw += degrees;
    }

    /// Swap the right arm between rest and `angle`.
    pub fn toggle_wave(&mut self, angle: f32) {
        self.arm_angle = if self.arm_angle == 0.0 { angle } else { 0.0 };
    }

    /// Swap the eyes between open and shortened by `shrink`.
    pub fn toggle_blink(&mut self, shrink: f32) {
        self.eye_shrink = if self.eye_shrink == 0.0 { shrink } else { 0.0 };
    }

    /// Lift the figure by `height`. Returns `false` (and changes nothing)
    /// when it is already raised, so a held key does not re-trigger.
    pub fn start_jump(&mut self, height: f32) -> bool {
        if self.jump_offset != 0.0 {
            return false;
        }
        self.jump_offset = height;
        true
    }

    /// Drop the figure back to baseline. Returns whether it was raised.
    pub fn end_jump(&mut self) -> bool {
        let was_raised = self.jump_offset != 0.0;
        self.jump_offset = 0.0;
        was_raised
    }

    /// Whether the eyes are currently shortened.
    #[must_use]
    pub fn is_blinking(&self) -> bool {
        self.eye_shrink != 0.0
    }

    /// Amount currently taken off the eye height.
    #[must_use]
    pub fn eye_shrink(&self) -> f32 {
        self.eye_shrink
    }
}

/// Everything input and time can change: the galaxy camera and the robot
/// pose.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Zoom, rotation accumulator and spin direction.
    pub camera: CameraRig,
    /// Robot joint angles and toggles.
    pub pose: RobotPose,
}

impl AnimationState {
    /// Fresh state: zoom at its minimum, no spin, robot at rest.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            camera: CameraRig::new(&options.camera),
            pose: RobotPose::default(),
        }
    }

    /// Apply one input command. Every command touches exactly one field.
    pub fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::ZoomOut => self.camera.zoom_out(),
            SceneCommand::ZoomIn => self.camera.zoom_in(),
            SceneCommand::ReverseSpin => {
                self.camera.reverse();
                log::info!("Spin direction: {:?}", self.camera.direction());
            }
            SceneCommand::AddSpin { radians } => {
                self.camera.add_spin(radians);
            }
            SceneCommand::TurnBody { degrees } => self.pose.turn(degrees),
            SceneCommand::ToggleWave { angle } => self.pose.toggle_wave(angle),
            SceneCommand::ToggleBlink { shrink } => {
                self.pose.toggle_blink(shrink);
            }
            SceneCommand::StartJump { height } => {
                if self.pose.start_jump(height) {
                    log::info!("Jump: raised by {height}");
                }
            }
            SceneCommand::EndJump => {
                if self.pose.end_jump() {
                    log::info!("Jump: back to baseline");
                }
            }
        }
    }
}
