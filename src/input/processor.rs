//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! viewport width for the edge rule) and the key-binding map. It is the
//! only thing that sits between raw window events and
//! [`AnimationState::apply`](crate::animation::AnimationState::apply).

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::{near_edge, speed_increment, PointerTracker};
use crate::engine::command::SceneCommand;
use crate::options::{GalaxyOptions, KeybindingOptions, Options, RobotOptions};
use crate::scene::SceneKind;

/// Converts raw window events into [`SceneCommand`]s for one scene.
///
/// Keys bound to the other scene's actions and keys with no binding are
/// ignored, as is pointer motion in the robot scene.
///
/// # Usage
///
/// ```
/// use starbot::engine::SceneCommand;
/// use starbot::input::{InputEvent, InputProcessor};
/// use starbot::options::Options;
/// use starbot::scene::SceneKind;
///
/// let mut input = InputProcessor::new(SceneKind::Galaxy, &Options::default());
/// assert_eq!(
///     input.handle_event(&InputEvent::key_down("ArrowDown")),
///     Some(SceneCommand::ZoomOut)
/// );
/// assert_eq!(input.handle_event(&InputEvent::key_down("KeyT")), None);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    scene: SceneKind,
    key_bindings: KeybindingOptions,
    galaxy: GalaxyOptions,
    robot: RobotOptions,
    pointer: PointerTracker,
    viewport_width: f32,
}

impl InputProcessor {
    /// Create a processor for `scene` using the bindings and step sizes in
    /// `options`.
    #[must_use]
    pub fn new(scene: SceneKind, options: &Options) -> Self {
        Self {
            scene,
            key_bindings: options.keybindings.clone(),
            galaxy: options.galaxy.clone(),
            robot: options.robot.clone(),
            pointer: PointerTracker::default(),
            viewport_width: 0.0,
        }
    }

    /// The scene this processor serves.
    #[must_use]
    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Canvas width in logical pixels, used by the edge-proximity rule.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::KeyDown { key } => self.handle_key(key, true),
            InputEvent::KeyUp { key } => self.handle_key(key, false),
            InputEvent::CursorMoved { x, .. } => self.handle_cursor_moved(*x),
        }
    }

    /// Key press/release: look up the binding and pick the edge it fires
    /// on.
    fn handle_key(&self, key: &str, pressed: bool) -> Option<SceneCommand> {
        let action = self.key_bindings.lookup(key)?;
        if action.scene() != self.scene {
            log::debug!("Ignoring {action:?} outside the {:?} scene", action.scene());
            return None;
        }

        let command = match (action, pressed) {
            (KeyAction::ZoomOut, true) => SceneCommand::ZoomOut,
            (KeyAction::ZoomIn, true) => SceneCommand::ZoomIn,
            (KeyAction::ReverseSpin, false) => SceneCommand::ReverseSpin,
            (KeyAction::TurnBody, true) => SceneCommand::TurnBody {
                degrees: self.robot.turn_step,
            },
            (KeyAction::WaveArm, true) => SceneCommand::ToggleWave {
                angle: self.robot.wave_angle,
            },
            (KeyAction::Blink, true) => SceneCommand::ToggleBlink {
                shrink: self.robot.blink_shrink,
            },
            (KeyAction::Jump, true) => SceneCommand::StartJump {
                height: self.robot.jump_height,
            },
            (KeyAction::Jump, false) => SceneCommand::EndJump,
            _ => return None,
        };
        Some(command)
    }

    /// Cursor moved: quantize horizontal speed and add the edge bonus.
    fn handle_cursor_moved(&mut self, x: f32) -> Option<SceneCommand> {
        if self.scene != SceneKind::Galaxy {
            return None;
        }

        let speed = self.pointer.displacement(x);
        let mut radians = speed_increment(speed);
        // No edges until the first resize reports a width.
        if self.viewport_width > 0.0
            && near_edge(x, self.viewport_width, self.galaxy.edge_margin)
        {
            radians += self.galaxy.edge_bonus;
        }
        log::debug!("Pointer at x={x:.0}, speed {speed:.0}px -> +{radians:.5} rad");

        (radians > 0.0).then_some(SceneCommand::AddSpin { radians })
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn galaxy() -> InputProcessor {
        let mut input = InputProcessor::new(SceneKind::Galaxy, &Options::default());
        input.set_viewport_width(1500.0);
        input
    }

    fn robot() -> InputProcessor {
        InputProcessor::new(SceneKind::Robot, &Options::default())
    }

    fn spin_of(command: Option<SceneCommand>) -> f32 {
        match command {
            Some(SceneCommand::AddSpin { radians }) => radians,
            None => 0.0,
            Some(other) => panic!("expected AddSpin, got {other:?}"),
        }
    }

    #[test]
    fn zoom_keys_fire_on_press_only() {
        let mut input = galaxy();
        assert_eq!(
            input.handle_event(&InputEvent::key_down("ArrowDown")),
            Some(SceneCommand::ZoomOut)
        );
        assert_eq!(
            input.handle_event(&InputEvent::key_down("ArrowUp")),
            Some(SceneCommand::ZoomIn)
        );
        assert_eq!(input.handle_event(&InputEvent::key_up("ArrowDown")), None);
    }

    #[test]
    fn reverse_fires_on_release_not_press() {
        let mut input = galaxy();
        assert_eq!(input.handle_event(&InputEvent::key_down("KeyR")), None);
        assert_eq!(
            input.handle_event(&InputEvent::key_up("KeyR")),
            Some(SceneCommand::ReverseSpin)
        );
    }

    #[test]
    fn robot_keys_carry_configured_steps() {
        let mut input = robot();
        assert_eq!(
            input.handle_event(&InputEvent::key_down("KeyT")),
            Some(SceneCommand::TurnBody { degrees: 15.0 })
        );
        assert_eq!(
            input.handle_event(&InputEvent::key_down("KeyW")),
            Some(SceneCommand::ToggleWave { angle: 75.0 })
        );
        assert_eq!(
            input.handle_event(&InputEvent::key_down("KeyB")),
            Some(SceneCommand::ToggleBlink { shrink: 0.15 })
        );
        assert_eq!(
            input.handle_event(&InputEvent::key_down("KeyJ")),
            Some(SceneCommand::StartJump { height: 1.5 })
        );
        assert_eq!(
            input.handle_event(&InputEvent::key_up("KeyJ")),
            Some(SceneCommand::EndJump)
        );
    }

    #[test]
    fn unknown_and_foreign_keys_are_ignored() {
        let mut g = galaxy();
        let mut r = robot();
        assert_eq!(g.handle_event(&InputEvent::key_down("KeyZ")), None);
        assert_eq!(g.handle_event(&InputEvent::key_down("KeyT")), None);
        assert_eq!(r.handle_event(&InputEvent::key_down("ArrowDown")), None);
        assert_eq!(r.handle_event(&InputEvent::key_up("KeyR")), None);
    }

    #[test]
    fn rebinding_moves_the_action() {
        let mut input = galaxy();
        input.key_bindings_mut().bind(KeyAction::ReverseSpin, "Space");
        assert_eq!(input.handle_event(&InputEvent::key_up("KeyR")), None);
        assert_eq!(
            input.handle_event(&InputEvent::key_up("Space")),
            Some(SceneCommand::ReverseSpin)
        );
    }

    #[test]
    fn pointer_speed_maps_to_spin() {
        let mut input = galaxy();
        let first = input.handle_event(&InputEvent::CursorMoved { x: 700.0, y: 0.0 });
        assert_eq!(first, None);

        let slow = spin_of(input.handle_event(&InputEvent::CursorMoved { x: 702.0, y: 0.0 }));
        assert_eq!(slow, PI / 1000.0);

        let fast = spin_of(input.handle_event(&InputEvent::CursorMoved { x: 782.0, y: 0.0 }));
        assert_eq!(fast, PI / 400.0);
    }

    #[test]
    fn faster_motion_never_spins_less() {
        let mut previous = 0.0;
        for d in 0..80 {
            let mut input = galaxy();
            let _ = input.handle_event(&InputEvent::CursorMoved { x: 600.0, y: 0.0 });
            let spin = spin_of(input.handle_event(&InputEvent::CursorMoved {
                x: 600.0 + d as f32,
                y: 0.0,
            }));
            assert!(spin >= previous);
            previous = spin;
        }
    }

    #[test]
    fn edges_add_a_bonus_even_when_still() {
        let mut input = galaxy();
        let bonus = spin_of(input.handle_event(&InputEvent::CursorMoved { x: 50.0, y: 0.0 }));
        assert_eq!(bonus, PI / 850.0);

        let both = spin_of(input.handle_event(&InputEvent::CursorMoved { x: 60.0, y: 0.0 }));
        assert!((both - (PI / 925.0 + PI / 850.0)).abs() < 1e-7);

        let right = spin_of(input.handle_event(&InputEvent::CursorMoved { x: 1450.0, y: 0.0 }));
        assert!(right > PI / 400.0);
    }

    #[test]
    fn no_edge_bonus_before_a_resize() {
        let mut input = InputProcessor::new(SceneKind::Galaxy, &Options::default());
        assert_eq!(input.handle_event(&InputEvent::CursorMoved { x: 10.0, y: 0.0 }), None);
    }

    #[test]
    fn robot_ignores_pointer_motion() {
        let mut input = robot();
        input.set_viewport_width(1500.0);
        assert_eq!(input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 }), None);
        assert_eq!(input.handle_event(&InputEvent::CursorMoved { x: 900.0, y: 0.0 }), None);
    }
}
