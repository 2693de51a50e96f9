use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Point-cloud generation and pointer-spin parameters.
pub struct GalaxyOptions {
    /// Number of stars generated at scene creation.
    pub star_count: usize,
    /// Fixed RNG seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Margin in logical pixels from either canvas edge that earns the
    /// edge bonus.
    pub edge_margin: f32,
    /// Extra spin (radians) per pointer move inside the edge margin.
    pub edge_bonus: f32,
}

impl Default for GalaxyOptions {
    fn default() -> Self {
        Self {
            star_count: 5000,
            seed: None,
            edge_margin: 100.0,
            edge_bonus: PI / 850.0,
        }
    }
}
