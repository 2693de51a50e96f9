use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Clear colors and frame pacing.
pub struct DisplayOptions {
    /// RGBA clear color behind the galaxy.
    pub galaxy_clear: [f32; 4],
    /// RGBA clear color behind the robot.
    pub robot_clear: [f32; 4],
    /// Frame rate cap for headless runs (0 = unlimited). Windowed runs are
    /// paced by the host's redraw requests instead.
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            galaxy_clear: [0.0, 0.0, 0.0, 1.0],
            robot_clear: [0.50, 0.75, 0.75, 0.95],
            target_fps: 60,
        }
    }
}
