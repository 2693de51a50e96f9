use glam::{Mat4, Vec3};

use super::core::{CameraMatrices, Perspective};
use crate::options::CameraOptions;

/// Which way the galaxy spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinDirection {
    /// Positive sign.
    #[default]
    Forward,
    /// Negative sign; the model rotates the mirrored way.
    Reverse,
}

impl SpinDirection {
    /// `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Galaxy camera: a clamped dolly distance, a rotation accumulator driven
/// one fixed step per frame, and the perspective that views it.
///
/// The accumulator only grows. The direction sign is applied when the
/// model matrix is built, so reversing mirrors the current orientation.
/// It is advanced by frames, not wall-clock time, so a slow frame rate
/// spins the galaxy slowly.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    zoom: f32,
    spin: f32,
    pending_spin: f32,
    direction: SpinDirection,

    zoom_step: f32,
    min_zoom: f32,
    max_zoom: f32,
    spin_step: f32,
    model_scale: f32,

    /// Projection parameters; the aspect follows the viewport.
    pub perspective: Perspective,
}

impl CameraRig {
    /// Camera at its minimum zoom with no accumulated spin.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            zoom: options.min_zoom,
            spin: 0.0,
            pending_spin: 0.0,
            direction: SpinDirection::Forward,
            zoom_step: options.zoom_step,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom.max(options.min_zoom),
            spin_step: options.spin_step,
            model_scale: options.model_scale,
            perspective: Perspective {
                fovy: options.fovy,
                aspect: 1.0,
                znear: options.znear,
                zfar: options.zfar,
                depth_range: options.depth_range,
            },
        }
    }

    /// Current dolly distance, always within `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current rotation accumulator in radians. Never decreases.
    #[must_use]
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Rotation the model is drawn with: the accumulator signed by the
    /// direction.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.direction.sign() * self.spin
    }

    /// Pointer-driven spin waiting for the next frame.
    #[must_use]
    pub fn pending_spin(&self) -> f32 {
        self.pending_spin
    }

    /// Current spin direction.
    #[must_use]
    pub fn direction(&self) -> SpinDirection {
        self.direction
    }

    /// Step the camera away from the scene, saturating at `max_zoom`.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom + self.zoom_step).min(self.max_zoom);
    }

    /// Step the camera toward the scene, saturating at `min_zoom`.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom - self.zoom_step).max(self.min_zoom);
    }

    /// Flip the spin direction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Queue extra spin (radians) to be folded in by the next
    /// [`advance`](Self::advance).
    pub fn add_spin(&mut self, radians: f32) {
        self.pending_spin += radians;
    }

    /// Advance one frame: the fixed step plus any pending spin. Returns
    /// the increment signed by the direction.
    pub fn advance(&mut self) -> f32 {
        let step = self.spin_step + self.pending_spin;
        self.pending_spin = 0.0;
        self.spin += step;
        self.direction.sign() * step
    }

    /// Update the aspect ratio after a viewport change.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.perspective.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Camera pushed back by the zoom distance along +Z, then inverted:
    /// moving the camera away equals moving the world away.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.zoom)).inverse()
    }

    /// Static scale followed by the signed spin about Z then Y.
    #[must_use]
    pub fn model(&self) -> Mat4 {
        let angle = self.angle();
        Mat4::from_scale(Vec3::splat(self.model_scale))
            * Mat4::from_rotation_z(angle)
            * Mat4::from_rotation_y(angle)
    }

    /// Perspective projection for the current aspect.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.perspective.build_projection()
    }

    /// All three matrices for the current state.
    #[must_use]
    pub fn matrices(&self) -> CameraMatrices {
        CameraMatrices {
            view: self.view(),
            projection: self.projection(),
            model: self.model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default())
    }

    #[test]
    fn starts_at_minimum_zoom() {
        let rig = rig();
        assert_eq!(rig.zoom(), 0.0);
        assert_eq!(rig.spin(), 0.0);
        assert_eq!(rig.direction(), SpinDirection::Forward);
    }

    #[test]
    fn zoom_in_never_goes_below_minimum() {
        let mut rig = rig();
        for _ in 0..25 {
            rig.zoom_in();
            assert!(rig.zoom() >= 0.0);
        }
        assert_eq!(rig.zoom(), 0.0);
    }

    #[test]
    fn zoom_out_saturates_at_maximum() {
        let mut rig = rig();
        for _ in 0..5 {
            rig.zoom_out();
        }
        assert_eq!(rig.zoom(), 2.5);
        for _ in 0..5 {
            rig.zoom_out();
        }
        assert_eq!(rig.zoom(), 5.0);
        for _ in 0..10 {
            rig.zoom_out();
            assert_eq!(rig.zoom(), 5.0);
        }
        rig.zoom_in();
        assert_eq!(rig.zoom(), 4.5);
    }

    #[test]
    fn uneven_step_clamps_instead_of_overshooting() {
        let mut rig = CameraRig::new(&CameraOptions {
            zoom_step: 2.0,
            ..CameraOptions::default()
        });
        for _ in 0..3 {
            rig.zoom_out();
        }
        assert_eq!(rig.zoom(), 5.0);
    }

    #[test]
    fn advance_adds_one_fixed_step_per_frame() {
        let mut rig = rig();
        for _ in 0..10 {
            let _ = rig.advance();
        }
        assert!((rig.spin() - 10.0 * PI / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn reversing_twice_restores_the_sign() {
        let mut rig = rig();
        rig.reverse();
        assert_eq!(rig.direction(), SpinDirection::Reverse);
        rig.reverse();
        assert_eq!(rig.direction(), SpinDirection::Forward);
    }

    #[test]
    fn reversing_once_inverts_the_frame_increment() {
        let mut rig = rig();
        let forward = rig.advance();
        rig.reverse();
        let backward = rig.advance();
        assert!(forward > 0.0);
        assert_eq!(backward, -forward);
        assert!((rig.spin() - 2.0 * forward).abs() < 1e-7);
    }

    #[test]
    fn reversing_mirrors_the_model_instead_of_rewinding() {
        let mut rig = rig();
        for _ in 0..4 {
            let _ = rig.advance();
        }
        let before = rig.spin();
        let forward_model = rig.model();

        rig.reverse();
        assert_eq!(rig.angle(), -before);
        let expected = Mat4::from_scale(Vec3::splat(0.5))
            * Mat4::from_rotation_z(-before)
            * Mat4::from_rotation_y(-before);
        assert!(rig.model().abs_diff_eq(expected, 1e-6));
        assert!(!rig.model().abs_diff_eq(forward_model, 1e-6));

        let mut last = before;
        for _ in 0..5 {
            let _ = rig.advance();
            assert!(rig.spin() > last);
            last = rig.spin();
        }
        assert!((rig.angle() + last).abs() < 1e-7);
    }

    #[test]
    fn pending_spin_is_folded_in_once() {
        let mut rig = rig();
        rig.add_spin(0.01);
        rig.add_spin(0.02);
        let delta = rig.advance();
        assert!((delta - (PI / 1000.0 + 0.03)).abs() < 1e-6);
        assert_eq!(rig.pending_spin(), 0.0);
        let delta = rig.advance();
        assert!((delta - PI / 1000.0).abs() < 1e-7);
    }

    #[test]
    fn view_moves_the_world_away_by_the_zoom() {
        let mut rig = rig();
        rig.zoom_out();
        rig.zoom_out();
        let p = rig.view().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn model_scales_before_spinning() {
        let rig = rig();
        let p = rig.model().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn resize_tracks_aspect() {
        let mut rig = rig();
        rig.resize(1500, 750);
        assert_eq!(rig.perspective.aspect, 2.0);
        rig.resize(0, 0);
        assert_eq!(rig.perspective.aspect, 1.0);
    }
}
