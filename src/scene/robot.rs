//! The articulated robot: body-part identities, dimensions, and the joint
//! that attaches each part to its parent.
//!
//! Every part is a unit cube scaled to its dimensions. Parts hang off the
//! chest (head, legs, arms) or off the head (eyes). A joint is a translation
//! plus rotation expressed in the parent's frame; the mobile right-arm joint
//! also carries the wave angle.

use glam::{Mat4, Quat, Vec3};

use crate::animation::RobotPose;

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Width, height and depth of a body part's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Extent along X.
    pub width: f32,
    /// Extent along Y (the direction the box grows from its anchor).
    pub height: f32,
    /// Extent along Z.
    pub depth: f32,
}

impl Dimensions {
    /// Construct from width, height and depth.
    #[must_use]
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Scale vector for the unit cube.
    #[must_use]
    pub fn scale(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

/// Chest box; the root every other part is placed from.
pub const CHEST: Dimensions = Dimensions::new(3.5, 5.5, 2.0);
/// Head box.
pub const HEAD: Dimensions = Dimensions::new(2.0, 2.0, 2.0);
/// Either leg.
pub const LEG: Dimensions = Dimensions::new(1.0, 5.5, 2.0);
/// Either arm.
pub const ARM: Dimensions = Dimensions::new(0.75, 5.0, 2.0);
/// Either eye, open.
pub const EYE: Dimensions = Dimensions::new(0.25, 0.25, 0.25);

/// Gap between the top of the chest and the bottom of the head.
const NECK_GAP: f32 = 0.25;

// ---------------------------------------------------------------------------
// BodyPart
// ---------------------------------------------------------------------------

/// Identity of one rigid segment of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    /// Root of the hierarchy.
    Chest,
    /// Sits above the chest.
    Head,
    /// Hangs below the chest, left side.
    LeftLeg,
    /// Hangs below the chest, right side.
    RightLeg,
    /// Static arm on the left side of the chest.
    LeftArm,
    /// Mobile arm on the right side; swings by the wave angle.
    RightArm,
    /// Front of the head, left.
    LeftEye,
    /// Front of the head, right.
    RightEye,
}

impl BodyPart {
    /// Every part, in the order the renderer draws them.
    pub const DRAW_ORDER: [Self; 8] = [
        Self::Chest,
        Self::Head,
        Self::LeftLeg,
        Self::RightLeg,
        Self::LeftArm,
        Self::LeftEye,
        Self::RightEye,
        Self::RightArm,
    ];

    /// The part this one is attached to; `None` for the chest.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Chest => None,
            Self::Head
            | Self::LeftLeg
            | Self::RightLeg
            | Self::LeftArm
            | Self::RightArm => Some(Self::Chest),
            Self::LeftEye | Self::RightEye => Some(Self::Head),
        }
    }

    /// Path from the root down to this part, inclusive at both ends.
    #[must_use]
    pub fn lineage(self) -> Vec<Self> {
        let mut path = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Whether `other` lies on this part's path to the root.
    #[must_use]
    pub fn is_descendant_of(self, other: Self) -> bool {
        let mut current = self.parent();
        while let Some(part) = current {
            if part == other {
                return true;
            }
            current = part.parent();
        }
        false
    }

    /// Box dimensions in the given pose. Only the eyes change shape:
    /// blinking shortens them by `blink_shrink`.
    #[must_use]
    pub fn dimensions(self, pose: &RobotPose) -> Dimensions {
        match self {
            Self::Chest => CHEST,
            Self::Head => HEAD,
            Self::LeftLeg | Self::RightLeg => LEG,
            Self::LeftArm | Self::RightArm => ARM,
            Self::LeftEye | Self::RightEye => Dimensions {
                height: EYE.height - pose.eye_shrink(),
                ..EYE
            },
        }
    }

    /// Joint attaching this part to its parent, in the parent's frame.
    ///
    /// The chest's joint places the whole figure: jump lift plus body yaw.
    #[must_use]
    pub fn joint(self, pose: &RobotPose) -> Joint {
        match self {
            Self::Chest => Joint {
                translation: Vec3::new(0.0, pose.jump_offset, 0.0),
                rotation: Quat::from_rotation_y(pose.body_yaw.to_radians()),
            },
            Self::Head => Joint::offset(0.0, CHEST.height + NECK_GAP, 0.0),
            Self::LeftLeg => Joint::offset(
                -CHEST.width * 0.25,
                -(CHEST.height + NECK_GAP),
                0.0,
            ),
            Self::RightLeg => Joint::offset(
                CHEST.width * 0.25,
                -(CHEST.height + NECK_GAP),
                0.0,
            ),
            Self::LeftArm => Joint::offset(-CHEST.width * 0.675, -NECK_GAP, 0.0),
            // Shoulder pivot near the top of the chest; the half turn makes
            // the arm hang down from it.
            Self::RightArm => Joint {
                translation: Vec3::new(
                    CHEST.width * 0.325 + 1.2,
                    CHEST.height - 0.75,
                    0.0,
                ),
                rotation: Quat::from_rotation_z(
                    (180.0 + pose.arm_angle).to_radians(),
                ),
            },
            // Eyes face forward with a quarter turn so their boxes line up
            // along the face.
            Self::LeftEye => Joint {
                translation: Vec3::new(
                    CHEST.width * 0.325 - 1.5,
                    HEAD.height * 0.5 + NECK_GAP,
                    HEAD.depth * 0.5,
                ),
                rotation: Quat::from_rotation_y(90_f32.to_radians()),
            },
            Self::RightEye => Joint {
                translation: Vec3::new(
                    CHEST.width * 0.325 - 0.7,
                    HEAD.height * 0.5 + NECK_GAP,
                    HEAD.depth * 0.5,
                ),
                rotation: Quat::from_rotation_y(90_f32.to_radians()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Joint
// ---------------------------------------------------------------------------

/// Rigid attachment of a child frame to its parent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Offset of the child's anchor in the parent frame.
    pub translation: Vec3,
    /// Orientation of the child frame relative to the parent.
    pub rotation: Quat,
}

impl Joint {
    /// A pure translation joint.
    #[must_use]
    pub fn offset(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation: Quat::IDENTITY,
        }
    }

    /// `translate(translation) · rotate(rotation)`.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}
