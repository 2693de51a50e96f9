//! The engine's complete interactive vocabulary.
//!
//! Every state change a key press or pointer move can cause is represented
//! as a `SceneCommand`. The [`InputProcessor`](crate::input::InputProcessor)
//! produces them and
//! [`AnimationState::apply`](crate::animation::AnimationState::apply)
//! consumes them, once per frame, before any matrix is derived.

/// A single state mutation for one of the two scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Galaxy ──
    /// Push the camera back one zoom step (saturating at the maximum).
    ZoomOut,
    /// Pull the camera in one zoom step (saturating at the minimum).
    ZoomIn,
    /// Flip the spin direction.
    ReverseSpin,
    /// Queue extra spin for the next frame advance.
    AddSpin {
        /// Unsigned increment in radians.
        radians: f32,
    },

    // ── Robot ──
    /// Add body yaw.
    TurnBody {
        /// Increment in degrees.
        degrees: f32,
    },
    /// Toggle the right arm between rest and `angle`.
    ToggleWave {
        /// Raised arm angle in degrees.
        angle: f32,
    },
    /// Toggle the eyes between open and shortened.
    ToggleBlink {
        /// Amount taken off the eye height while blinking.
        shrink: f32,
    },
    /// Lift the figure, unless it is already lifted.
    StartJump {
        /// Vertical lift.
        height: f32,
    },
    /// Return the figure to the ground.
    EndJump,
}
