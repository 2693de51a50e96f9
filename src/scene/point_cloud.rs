//! Procedural star field: unit-sphere positions with per-star sizes.

use std::ops::Range;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the cube that candidate positions are drawn from.
const SAMPLE_HALF_EXTENT: f32 = 0.5;

/// Range of each of the three summed size draws. Summing three draws keeps
/// the smallest possible size at 0.03, so no star vanishes.
const SIZE_DRAW: Range<f32> = 0.01..1.01;

/// Number of independent draws summed into one size.
const SIZE_DRAWS: usize = 3;

/// One star: a unit-length position and a strictly positive size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Direction from the origin, always unit length.
    pub position: Vec3,
    /// Rendered point size, in `[0.03, 3.03)`.
    pub size: f32,
}

/// Immutable star field, generated once at scene creation.
///
/// Positions are sampled uniformly in the cube `[-0.5, 0.5)³` and then
/// normalized, so they lie on the unit sphere with the density bias of a
/// cube projection (corners are denser). That bias is part of the look
/// and is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
}

impl PointCloud {
    /// Generate `count` stars from the given random source.
    ///
    /// `count == 0` yields an empty cloud.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count).map(|_| sample_direction(rng)).collect();
        let sizes = (0..count).map(|_| sample_size(rng)).collect();
        Self { positions, sizes }
    }

    /// Generate from a fixed seed, or from the thread RNG when `seed` is
    /// `None`.
    #[must_use]
    pub fn generate_seeded(count: usize, seed: Option<u64>) -> Self {
        let cloud = match seed {
            Some(seed) => {
                Self::generate(count, &mut StdRng::seed_from_u64(seed))
            }
            None => Self::generate(count, &mut rand::rng()),
        };
        log::info!(
            "Generated {count} stars (seed: {})",
            seed.map_or_else(|| "random".to_owned(), |s| s.to_string())
        );
        cloud
    }

    /// Number of stars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the cloud has no stars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Star positions, in generation order.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Star sizes, parallel to [`positions`](Self::positions).
    #[must_use]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Iterate stars as position/size pairs.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions
            .iter()
            .zip(&self.sizes)
            .map(|(&position, &size)| Point { position, size })
    }
}

/// Draw a cube sample and project it onto the unit sphere.
fn sample_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.random::<f32>() - SAMPLE_HALF_EXTENT,
            rng.random::<f32>() - SAMPLE_HALF_EXTENT,
            rng.random::<f32>() - SAMPLE_HALF_EXTENT,
        );
        // The origin itself has no direction; draw again.
        if let Some(direction) = candidate.try_normalize() {
            return direction;
        }
    }
}

fn sample_size<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (0..SIZE_DRAWS).map(|_| rng.random_range(SIZE_DRAW)).sum()
}
