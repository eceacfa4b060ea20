//! Classification of raw input records into typed activity events.
//!
//! The classifier is the single entry point between the OS input layer and
//! the activity tracker: every record delivered by `rdev` is mapped to one
//! [`ActivityEvent`] (or to nothing, when the record carries no
//! activity-relevant flag). It is a pure mapping and never touches shared
//! state, so it can run directly on the input listener thread.

use rdev::{Button, EventType};

/// A logical source of pointer activity.
///
/// Physical buttons follow a press/release protocol and may be asserted by
/// two devices at once (mouse and touchpad reporting the same button), which
/// the tracker de-duplicates. `Wheel` and `Movement` are synthetic tokens:
/// scroll and motion records are discrete samples with no release
/// counterpart, so they follow a two-state toggle instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerToken {
    LeftButton,
    MiddleButton,
    RightButton,
    Wheel,
    Movement,
}

impl PointerToken {
    /// Number of distinct pointer tokens.
    pub const COUNT: usize = 5;

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Wheel and movement bursts toggle instead of pairing press/release.
    pub(crate) fn is_burst(self) -> bool {
        matches!(self, PointerToken::Wheel | PointerToken::Movement)
    }
}

/// A typed hardware activity event derived from one raw input record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityEvent {
    /// A keyboard key transitioned to the down state.
    KeyDown(rdev::Key),
    /// A keyboard key was released.
    KeyUp(rdev::Key),
    /// A pointer button was pressed.
    ButtonDown(PointerToken),
    /// A pointer button was released.
    ButtonUp(PointerToken),
    /// One discrete scroll sample.
    WheelTick,
    /// One discrete pointer motion sample.
    PointerMoved,
}

/// Maps a raw input record to a typed activity event.
///
/// Returns `None` when the record carries no activity-relevant flag: extra
/// mouse buttons the tracker does not follow, or a scroll record with both
/// deltas zero. The caller skips such records and keeps listening.
pub fn classify(event_type: &EventType) -> Option<ActivityEvent> {
    match event_type {
        EventType::KeyPress(key) => Some(ActivityEvent::KeyDown(*key)),
        EventType::KeyRelease(key) => Some(ActivityEvent::KeyUp(*key)),
        EventType::ButtonPress(button) => pointer_button(button).map(ActivityEvent::ButtonDown),
        EventType::ButtonRelease(button) => pointer_button(button).map(ActivityEvent::ButtonUp),
        EventType::Wheel { delta_x, delta_y } => {
            if *delta_x == 0 && *delta_y == 0 {
                None
            } else {
                Some(ActivityEvent::WheelTick)
            }
        }
        EventType::MouseMove { .. } => Some(ActivityEvent::PointerMoved),
    }
}

/// Maps the buttons the tracker follows; side buttons are ignored.
fn pointer_button(button: &Button) -> Option<PointerToken> {
    match button {
        Button::Left => Some(PointerToken::LeftButton),
        Button::Middle => Some(PointerToken::MiddleButton),
        Button::Right => Some(PointerToken::RightButton),
        Button::Unknown(_) => None,
    }
}
