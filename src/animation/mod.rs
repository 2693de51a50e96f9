//! Animation state shared by the input layer and the frame loop.

pub mod state;

pub use state::{AnimationState, RobotPose};
