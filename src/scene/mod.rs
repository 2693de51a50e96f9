//! Scene content: the galaxy point cloud, the robot's body-part tree and
//! the transforms that place each part, plus the static meshes both
//! scenes upload.

/// Unit cube mesh and per-scene attribute buffers.
pub mod mesh_gen;
/// Unit-sphere point cloud with per-point sizes.
pub mod point_cloud;
/// Robot body parts, dimensions and joints.
pub mod robot;
/// Hierarchical transform composition.
pub mod transform;

use std::fmt;
use std::str::FromStr;

pub use point_cloud::{Point, PointCloud};
pub use robot::{BodyPart, Dimensions, Joint};
pub use transform::TransformComposer;

use crate::error::StarbotError;

// ---------------------------------------------------------------------------
// SceneKind
// ---------------------------------------------------------------------------

/// Which of the two scenes is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneKind {
    /// Spinning, zoomable point cloud.
    #[default]
    Galaxy,
    /// Articulated cube figure.
    Robot,
}

impl SceneKind {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Galaxy => "galaxy",
            Self::Robot => "robot",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = StarbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "galaxy" => Ok(Self::Galaxy),
            "robot" => Ok(Self::Robot),
            _ => Err(StarbotError::UnknownScene(s.to_owned())),
        }
    }
}
