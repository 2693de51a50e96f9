//! Input handling: event types, key actions, pointer-speed quantization,
//! and the input processor that converts raw window events into scene
//! commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Pointer-speed ladder and edge-proximity rule.
pub mod mouse;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
