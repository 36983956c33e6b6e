//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the frame needs redrawing.
    Consumed,
}

/// Returns the key of a press event.
///
/// Release and repeat events are dropped so each press acts once on
/// terminals that report key-up.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Returns whether the event changes the layout.
#[must_use]
pub const fn is_resize(event: &Event) -> bool {
    matches!(event, Event::Resize(..))
}
