/// Platform-agnostic input events.
///
/// These are queued on the engine and drained once per frame by the
/// [`InputProcessor`](super::InputProcessor), which converts them into
/// [`SceneCommand`](crate::engine::SceneCommand) values.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowDown"`, `"KeyR"`, `"Space"`, etc.
///
/// # Example
///
/// ```
/// use starbot::input::InputEvent;
///
/// let events = [
///     InputEvent::key_down("ArrowDown"),
///     InputEvent::CursorMoved { x: 120.0, y: 40.0 },
///     InputEvent::key_up("KeyR"),
/// ];
/// assert_eq!(events[0], InputEvent::KeyDown { key: "ArrowDown".into() });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed (or auto-repeated while held).
    KeyDown {
        /// Physical key identifier.
        key: String,
    },
    /// A key was released.
    KeyUp {
        /// Physical key identifier.
        key: String,
    },
    /// Cursor moved to absolute client position.
    CursorMoved {
        /// Horizontal position in logical pixels.
        x: f32,
        /// Vertical position in logical pixels.
        y: f32,
    },
}

impl InputEvent {
    /// Shorthand for [`InputEvent::KeyDown`].
    #[must_use]
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// Shorthand for [`InputEvent::KeyUp`].
    #[must_use]
    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp { key: key.into() }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit keyboard event. Keys without a physical code are
    /// dropped.
    #[must_use]
    pub fn from_winit_key(event: &winit::event::KeyEvent) -> Option<Self> {
        use winit::event::ElementState;
        use winit::keyboard::PhysicalKey;

        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let key = format!("{code:?}");
        Some(match event.state {
            ElementState::Pressed => Self::KeyDown { key },
            ElementState::Released => Self::KeyUp { key },
        })
    }
}
