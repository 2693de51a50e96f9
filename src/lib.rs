// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Transform and animation core for two small interactive 3D scenes: a
//! spinning, zoomable point-cloud galaxy and an articulated robot built
//! from scaled unit cubes.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - owns one scene's state and runs the frame
//!   step
//! - [`scene::TransformComposer`] - derives each body part's matrix from
//!   the robot pose
//! - [`camera::CameraRig`] - zoom, spin and the galaxy's matrices
//! - [`input::InputProcessor`] - turns key and pointer events into
//!   [`engine::SceneCommand`]s
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Window events are queued on the engine and drained once at the start of
//! each frame. The input processor converts them to commands, which mutate
//! the single [`animation::AnimationState`]. The frame step then advances
//! the camera, derives every drawable's matrix and hands matrices plus the
//! static attribute buffers to a [`gpu::RenderBackend`]. Nothing in the
//! core touches a GPU; the backend trait is the whole boundary.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{SceneCommand, SceneEngine};
pub use error::StarbotError;
pub use input::InputEvent;
pub use options::Options;
pub use scene::SceneKind;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
