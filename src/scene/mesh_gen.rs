//! Static vertex data for both scenes.
//!
//! The robot draws every part from one unit cube; the galaxy draws its
//! point cloud directly. Both are built once and uploaded once.

use bytemuck::{Pod, Zeroable};

use super::point_cloud::PointCloud;
use crate::gpu::{Attribute, AttributeBuffers};

/// Vertices in the unit cube mesh (6 faces x 2 triangles x 3).
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Warm face color.
pub const ORANGE: [f32; 4] = [0.9, 0.65, 0.15, 1.0];
/// Dark face color.
pub const DARK: [f32; 4] = [0.15, 0.15, 0.0, 1.0];

/// Homogeneous corners of a unit cube centered on the origin.
const CORNERS: [[f32; 4]; 8] = [
    [-0.5, -0.5, 0.5, 1.0],
    [-0.5, 0.5, 0.5, 1.0],
    [0.5, 0.5, 0.5, 1.0],
    [0.5, -0.5, 0.5, 1.0],
    [-0.5, -0.5, -0.5, 1.0],
    [-0.5, 0.5, -0.5, 1.0],
    [0.5, 0.5, -0.5, 1.0],
    [0.5, -0.5, -0.5, 1.0],
];

/// Per-corner colors; a face takes the color of its first corner.
const CORNER_COLORS: [[f32; 4]; 8] = [DARK, ORANGE, DARK, DARK, ORANGE, DARK, DARK, DARK];

/// Faces as corner quads, wound counter-clockwise from outside.
const FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
    [4, 5, 6, 7],
    [5, 4, 0, 1],
];

/// One vertex of the robot mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    /// Homogeneous position.
    pub position: [f32; 4],
    /// RGBA color.
    pub color: [f32; 4],
}

/// The 36 flat-shaded vertices of the unit cube.
#[must_use]
pub fn unit_cube() -> Vec<CubeVertex> {
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for &[a, b, c, d] in &FACES {
        let color = CORNER_COLORS[a];
        for corner in [a, b, c, a, c, d] {
            vertices.push(CubeVertex {
                position: CORNERS[corner],
                color,
            });
        }
    }
    vertices
}

/// Robot attribute streams: `vPosition` and `vColor`, 4 floats each.
#[must_use]
pub fn robot_buffers() -> AttributeBuffers {
    let cube = unit_cube();
    let positions: Vec<[f32; 4]> = cube.iter().map(|v| v.position).collect();
    let colors: Vec<[f32; 4]> = cube.iter().map(|v| v.color).collect();
    AttributeBuffers::new()
        .with(Attribute::from_pod("vPosition", 4, &positions))
        .with(Attribute::from_pod("vColor", 4, &colors))
}

/// Galaxy attribute streams: `position` (3 floats) and `size` (1 float).
#[must_use]
pub fn galaxy_buffers(cloud: &PointCloud) -> AttributeBuffers {
    AttributeBuffers::new()
        .with(Attribute::from_pod("position", 3, cloud.positions()))
        .with(Attribute::from_pod("size", 1, cloud.sizes()))
}
