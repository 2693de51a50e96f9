//! Hierarchical transform composition for the robot.
//!
//! A part's *frame* is the product of every joint from the root down to
//! it. The matrix handed to the renderer is that frame times the part's
//! local box transform, which lifts the unit cube by half its height so
//! it grows upward from its anchor. That lift is what lets parts stack
//! through plain additive offsets.

use glam::{Mat4, Quat, Vec3};

use super::robot::{BodyPart, Dimensions};
use crate::animation::RobotPose;

/// `translate(0, h/2, 0) · scale(w, h, d)` for a part's box.
#[must_use]
pub fn local_transform(dims: Dimensions) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.5 * dims.height, 0.0))
        * Mat4::from_scale(dims.scale())
}

/// Final matrix for a part whose frame is `parent`.
#[must_use]
pub fn compose(parent: Mat4, dims: Dimensions) -> Mat4 {
    parent * local_transform(dims)
}

/// Advance a frame by one joint step: `parent · translate · rotate`.
#[must_use]
pub fn compose_step(parent: Mat4, translation: Vec3, rotation: Quat) -> Mat4 {
    parent * Mat4::from_translation(translation) * Mat4::from_quat(rotation)
}

/// Derives per-part matrices for a robot pose.
///
/// Each frame is folded from the root on demand, so the result for a part
/// does not depend on which parts were visited before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformComposer {
    /// Transform applied above the chest (the view of the scene).
    base: Mat4,
}

impl Default for TransformComposer {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl TransformComposer {
    /// Compose under the given base transform.
    #[must_use]
    pub fn new(base: Mat4) -> Self {
        Self { base }
    }

    /// The part's frame: base times every joint from the chest down.
    #[must_use]
    pub fn frame(&self, part: BodyPart, pose: &RobotPose) -> Mat4 {
        part.lineage().into_iter().fold(self.base, |acc, p| {
            let joint = p.joint(pose);
            compose_step(acc, joint.translation, joint.rotation)
        })
    }

    /// The matrix the renderer draws the part's cube with.
    #[must_use]
    pub fn part_transform(&self, part: BodyPart, pose: &RobotPose) -> Mat4 {
        compose(self.frame(part, pose), part.dimensions(pose))
    }

    /// Every part with its final matrix, in draw order.
    #[must_use]
    pub fn draw_list(&self, pose: &RobotPose) -> Vec<(BodyPart, Mat4)> {
        BodyPart::DRAW_ORDER
            .iter()
            .map(|&part| (part, self.part_transform(part, pose)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::robot::{ARM, CHEST, HEAD, LEG};

    const EPS: f32 = 1e-4;

    /// Walks the figure with one running matrix, each step building on the
    /// previous part's frame, and records the matrix drawn for every part.
    fn running_walk(pose: &RobotPose) -> Vec<(BodyPart, Mat4)> {
        let eye = BodyPart::LeftEye.dimensions(pose);
        let mut drawn = Vec::new();

        let mut m = Mat4::from_translation(Vec3::new(0.0, pose.jump_offset, 0.0))
            * Mat4::from_rotation_y(pose.body_yaw.to_radians());
        drawn.push((BodyPart::Chest, compose(m, CHEST)));

        m *= Mat4::from_translation(Vec3::new(0.0, CHEST.height + 0.25, 0.0));
        drawn.push((BodyPart::Head, compose(m, HEAD)));

        m *= Mat4::from_translation(Vec3::new(
            -CHEST.width * 0.25,
            -CHEST.height * 2.0 - 0.5,
            0.0,
        ));
        drawn.push((BodyPart::LeftLeg, compose(m, LEG)));

        m *= Mat4::from_translation(Vec3::new(CHEST.width * 0.5, 0.0, 0.0));
        drawn.push((BodyPart::RightLeg, compose(m, LEG)));

        m *= Mat4::from_translation(Vec3::new(
            -CHEST.width * 0.925,
            CHEST.height,
            0.0,
        ));
        drawn.push((BodyPart::LeftArm, compose(m, ARM)));

        m *= Mat4::from_translation(Vec3::new(
            CHEST.width - 1.5,
            CHEST.height + 1.75,
            1.0,
        ));
        m *= Mat4::from_rotation_y(90_f32.to_radians());
        drawn.push((BodyPart::LeftEye, compose(m, eye)));

        m *= Mat4::from_translation(Vec3::new(0.0, 0.0, 0.80));
        drawn.push((BodyPart::RightEye, compose(m, eye)));

        m *= Mat4::from_rotation_y((-90_f32).to_radians());
        m *= Mat4::from_translation(Vec3::new(CHEST.width - 1.60, -2.25, -1.0));
        m *= Mat4::from_rotation_z(180_f32.to_radians());
        m *= Mat4::from_rotation_z(pose.arm_angle.to_radians());
        drawn.push((BodyPart::RightArm, compose(m, ARM)));

        drawn
    }

    fn assert_matches_running_walk(pose: &RobotPose) {
        let composer = TransformComposer::default();
        let tree = composer.draw_list(pose);
        let walk = running_walk(pose);
        assert_eq!(tree.len(), walk.len());
        for ((part_a, a), (part_b, b)) in tree.iter().zip(&walk) {
            assert_eq!(part_a, part_b);
            assert!(
                a.abs_diff_eq(*b, EPS),
                "{part_a:?} differs:\n{a}\nvs\n{b}"
            );
        }
    }

    #[test]
    fn local_transform_lifts_the_cube_by_half_its_height() {
        let m = local_transform(CHEST);
        // Bottom face of the unit cube lands on the anchor, top face at h.
        let bottom = m.transform_point3(Vec3::new(0.0, -0.5, 0.0));
        let top = m.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!(bottom.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(top.abs_diff_eq(Vec3::new(0.0, CHEST.height, 0.0), 1e-6));
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!((corner.x - CHEST.width * 0.5).abs() < 1e-6);
        assert!((corner.z - CHEST.depth * 0.5).abs() < 1e-6);
    }

    #[test]
    fn head_frame_is_chest_frame_then_neck_offset() {
        let mut pose = RobotPose::default();
        pose.turn(30.0);
        let composer = TransformComposer::default();

        let chest = composer.frame(BodyPart::Chest, &pose);
        let expected = chest
            * Mat4::from_translation(Vec3::new(0.0, CHEST.height + 0.25, 0.0))
            * local_transform(HEAD);
        let actual = composer.part_transform(BodyPart::Head, &pose);
        assert!(actual.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn rest_pose_matches_the_running_walk() {
        assert_matches_running_walk(&RobotPose::default());
    }

    #[test]
    fn animated_pose_matches_the_running_walk() {
        let mut pose = RobotPose::default();
        pose.turn(45.0);
        pose.turn(15.0);
        pose.toggle_wave(75.0);
        pose.toggle_blink(0.15);
        let _ = pose.start_jump(1.5);
        assert_matches_running_walk(&pose);
    }

    #[test]
    fn body_yaw_reaches_every_part() {
        let mut turned = RobotPose::default();
        turned.turn(90.0);
        let composer = TransformComposer::default();
        let rest = RobotPose::default();
        for part in BodyPart::DRAW_ORDER {
            let yawed = composer.frame(part, &turned);
            let expected = Mat4::from_rotation_y(90_f32.to_radians())
                * composer.frame(part, &rest);
            assert!(yawed.abs_diff_eq(expected, EPS), "{part:?}");
        }
    }

    #[test]
    fn wave_only_moves_the_right_arm() {
        let rest = RobotPose::default();
        let mut waving = RobotPose::default();
        waving.toggle_wave(75.0);
        let composer = TransformComposer::default();
        for part in BodyPart::DRAW_ORDER {
            let same = composer
                .part_transform(part, &rest)
                .abs_diff_eq(composer.part_transform(part, &waving), EPS);
            assert_eq!(same, part != BodyPart::RightArm, "{part:?}");
        }
    }

    #[test]
    fn jump_lifts_the_whole_figure() {
        let rest = RobotPose::default();
        let mut raised = RobotPose::default();
        assert!(raised.start_jump(1.5));
        let composer = TransformComposer::default();
        for part in BodyPart::DRAW_ORDER {
            let a = composer.part_transform(part, &rest).w_axis;
            let b = composer.part_transform(part, &raised).w_axis;
            assert!((b.y - a.y - 1.5).abs() < EPS, "{part:?}");
        }
    }

    #[test]
    fn base_transform_prefixes_every_frame() {
        let base = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
        let pose = RobotPose::default();
        let plain = TransformComposer::default();
        let viewed = TransformComposer::new(base);
        let eye = viewed.part_transform(BodyPart::RightEye, &pose);
        let expected = base * plain.part_transform(BodyPart::RightEye, &pose);
        assert!(eye.abs_diff_eq(expected, EPS));
    }
}
