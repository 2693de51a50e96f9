use std::f32::consts::PI;

/// Pointer-speed buckets: `(minimum horizontal displacement in px, divisor)`.
/// A move at or above the threshold adds `PI / divisor` of spin. Buckets are
/// 3 px wide; divisors fall by 25 up to the 49 px bucket and by 50 after,
/// so faster sweeps climb the ladder more steeply.
const SPEED_LADDER: [(f32, f32); 21] = [
    (1.0, 1000.0),
    (4.0, 975.0),
    (7.0, 950.0),
    (10.0, 925.0),
    (13.0, 900.0),
    (16.0, 875.0),
    (19.0, 850.0),
    (22.0, 825.0),
    (25.0, 800.0),
    (28.0, 775.0),
    (31.0, 750.0),
    (34.0, 725.0),
    (37.0, 700.0),
    (40.0, 675.0),
    (43.0, 650.0),
    (46.0, 625.0),
    (49.0, 600.0),
    (52.0, 550.0),
    (55.0, 500.0),
    (58.0, 450.0),
    (61.0, 400.0),
];

/// Displacement at which the ladder saturates.
pub const SATURATION_SPEED: f32 = 61.0;

/// Spin (radians) earned by one pointer move of `speed` pixels.
///
/// Zero below 1 px; monotonically non-decreasing in `speed`; constant at
/// `PI / 400` from [`SATURATION_SPEED`] up.
#[must_use]
pub fn speed_increment(speed: f32) -> f32 {
    SPEED_LADDER
        .iter()
        .rev()
        .find(|(threshold, _)| speed >= *threshold)
        .map_or(0.0, |(_, divisor)| PI / divisor)
}

/// Whether `x` lies within `margin` pixels of either edge of a canvas
/// `width` pixels wide.
#[must_use]
pub fn near_edge(x: f32, width: f32, margin: f32) -> bool {
    x <= margin || x >= width - margin
}

/// Tracks the last pointer position to derive per-event displacement.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerTracker {
    last_x: Option<f32>,
}

impl PointerTracker {
    /// Record a new horizontal position and return the absolute
    /// displacement from the previous one (0 for the first event).
    pub(crate) fn displacement(&mut self, x: f32) -> f32 {
        let previous = self.last_x.replace(x);
        previous.map_or(0.0, |prev| (x - prev).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_jitter_earns_nothing() {
        assert_eq!(speed_increment(0.0), 0.0);
        assert_eq!(speed_increment(0.9), 0.0);
    }

    #[test]
    fn bucket_edges_match_the_ladder() {
        assert_eq!(speed_increment(1.0), PI / 1000.0);
        assert_eq!(speed_increment(3.9), PI / 1000.0);
        assert_eq!(speed_increment(4.0), PI / 975.0);
        assert_eq!(speed_increment(51.0), PI / 600.0);
        assert_eq!(speed_increment(52.0), PI / 550.0);
        assert_eq!(speed_increment(60.5), PI / 450.0);
    }

    #[test]
    fn saturates_past_the_top_bucket() {
        let top = speed_increment(SATURATION_SPEED);
        assert_eq!(top, PI / 400.0);
        assert_eq!(speed_increment(500.0), top);
        assert_eq!(speed_increment(f32::MAX), top);
    }

    #[test]
    fn increment_is_monotonic_in_speed() {
        let mut previous = 0.0;
        let mut speed = 0.0;
        while speed < SATURATION_SPEED + 10.0 {
            let inc = speed_increment(speed);
            assert!(inc >= previous, "{speed}: {inc} < {previous}");
            previous = inc;
            speed += 0.25;
        }
    }

    #[test]
    fn ladder_is_sorted() {
        for pair in SPEED_LADDER.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn edges_are_inclusive_on_both_sides() {
        assert!(near_edge(0.0, 1500.0, 100.0));
        assert!(near_edge(100.0, 1500.0, 100.0));
        assert!(!near_edge(100.5, 1500.0, 100.0));
        assert!(!near_edge(750.0, 1500.0, 100.0));
        assert!(near_edge(1400.0, 1500.0, 100.0));
        assert!(near_edge(1499.0, 1500.0, 100.0));
    }

    #[test]
    fn first_move_has_no_displacement() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.displacement(300.0), 0.0);
        assert_eq!(tracker.displacement(310.0), 10.0);
        assert_eq!(tracker.displacement(290.0), 20.0);
    }
}
