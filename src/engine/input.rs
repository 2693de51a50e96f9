//! Event queue methods for SceneEngine

use std::sync::mpsc::Sender;

use super::SceneEngine;
use crate::input::InputEvent;

/// Cloneable handle for feeding events to a [`SceneEngine`] from another
/// thread. Events sent through it join the queue at the next frame, after
/// any events pushed directly.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    pub(super) fn new(tx: Sender<InputEvent>) -> Self {
        Self { tx }
    }

    /// Queue an event. Returns `false` once the engine has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

// ── Queue ──

impl SceneEngine {
    /// Queue a window event for the next frame.
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// A handle other threads can use to queue events.
    #[must_use]
    pub fn input_sender(&self) -> InputSender {
        self.sender.clone()
    }

    /// Events waiting for the next frame (not counting ones still in
    /// flight from an [`InputSender`]).
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued event to the animation state, in arrival order.
    /// Returns the number of commands that changed something.
    pub(super) fn drain_input(&mut self) -> usize {
        self.queue.extend(self.inbox.try_iter());

        let mut applied = 0;
        while let Some(event) = self.queue.pop_front() {
            if let Some(command) = self.input.handle_event(&event) {
                log::debug!("{event:?} -> {command:?}");
                self.state.apply(command);
                applied += 1;
            }
        }
        applied
    }
}
