use serde::{Deserialize, Serialize};

use crate::scene::SceneKind;

/// Scene-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// zoom_out = "ArrowDown"
/// reverse_spin = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the galaxy camera one zoom step farther away.
    ZoomOut,
    /// Move the galaxy camera one zoom step closer.
    ZoomIn,
    /// Flip the galaxy's spin direction (on key release).
    ReverseSpin,
    /// Add one turn step of yaw to the robot's body.
    TurnBody,
    /// Lift the robot while held.
    Jump,
    /// Toggle the robot's right arm between rest and raised.
    WaveArm,
    /// Toggle the robot's eyes between open and half-shut.
    Blink,
}

impl KeyAction {
    /// The scene whose state this action mutates.
    #[must_use]
    pub fn scene(self) -> SceneKind {
        match self {
            Self::ZoomOut | Self::ZoomIn | Self::ReverseSpin => {
                SceneKind::Galaxy
            }
            Self::TurnBody | Self::Jump | Self::WaveArm | Self::Blink => {
                SceneKind::Robot
            }
        }
    }
}
