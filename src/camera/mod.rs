//! Camera system for the two scenes.
//!
//! Provides the galaxy's zoomable, spinning perspective rig and the
//! projections both scenes hand to the renderer.

/// Galaxy camera rig: zoom, rotation accumulator and spin direction.
pub mod controller;
/// Projection parameters and per-frame matrix bundle.
pub mod core;

pub use controller::{CameraRig, SpinDirection};
pub use self::core::{CameraMatrices, Orthographic, Perspective};
