use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Step sizes for the robot's key-driven motions.
pub struct RobotOptions {
    /// Degrees of body yaw added per turn key press.
    pub turn_step: f32,
    /// Raised angle of the right arm in degrees.
    pub wave_angle: f32,
    /// Height the whole figure is lifted while the jump key is held.
    pub jump_height: f32,
    /// Amount subtracted from eye height while blinking.
    pub blink_shrink: f32,
    /// Half-extent of the orthographic viewing box.
    pub ortho_extent: f32,
}

impl Default for RobotOptions {
    fn default() -> Self {
        Self {
            turn_step: 15.0,
            wave_angle: 75.0,
            jump_height: 1.5,
            blink_shrink: 0.15,
            ortho_extent: 10.0,
        }
    }
}
