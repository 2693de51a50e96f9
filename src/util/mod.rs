//! Shared utilities for the frame loop.

/// FPS measurement and frame pacing.
pub mod frame_timing;
