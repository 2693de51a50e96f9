//! Crate-level error types.

use std::fmt;

/// Errors produced by the starbot crate.
///
/// The transform and animation core never fails; these cover the
/// configuration layer, the rendering-backend boundary, and the windowed
/// host.
#[derive(Debug)]
pub enum StarbotError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A rendering backend rejected an upload or draw.
    Backend(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// A scene name that matches neither the galaxy nor the robot.
    UnknownScene(String),
}

impl fmt::Display for StarbotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Backend(msg) => write!(f, "render backend error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::UnknownScene(name) => {
                write!(f, "unknown scene '{name}' (expected galaxy or robot)")
            }
        }
    }
}

impl std::error::Error for StarbotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StarbotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
