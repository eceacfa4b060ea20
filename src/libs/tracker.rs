//! The activity interval tracker.
//!
//! Reduces the keyboard and pointer event streams — two independently
//! clocked devices that may report overlapping or duplicate physical
//! actions — to a single merged active/inactive timeline with running
//! duration bookkeeping.
//!
//! ## State model
//!
//! - A set of currently held key codes. The first key down while everything
//!   else is idle opens a merged-active interval; releasing the last key
//!   while the pointer is idle closes it.
//! - A set of asserted pointer tokens (buttons, wheel, movement) with a
//!   per-token duplicate count. A button asserted again while already held
//!   is a second physical source (touchpad next to a mouse) and bumps the
//!   duplicate count instead of the set, so a single release does not close
//!   an interval the other device still holds open.
//! - The interval accumulator: the start timestamp of the currently open
//!   merged interval plus the total merged-active time observed since the
//!   last reset, in milliseconds of monotonic time.
//!
//! The whole state sits behind one `parking_lot::Mutex`; every operation
//! takes the lock for its full duration, so events from the input listener,
//! the reset scheduler and the foreground-switch hook serialize cleanly.
//! No operation blocks or performs I/O while holding the lock, and
//! `parking_lot` mutexes do not poison, so a panic elsewhere can never wedge
//! the tracker.
//!
//! Every mutating operation has a `*_at` twin taking an explicit timestamp.
//! The plain forms call them with `Instant::now()`; tests and offline replay
//! drive exact timelines through the `*_at` forms.

use crate::libs::event::{ActivityEvent, PointerToken};
use parking_lot::Mutex;
use rdev::Key;
use std::time::{Duration, Instant};

/// A consistent point-in-time view of the tracker, taken under one lock
/// acquisition. This is what the persistence sink samples and serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivitySnapshot {
    /// Total merged-active time since the last reset, in milliseconds.
    pub accumulated_ms: u64,
    /// At least one key is currently held.
    pub keyboard_active: bool,
    /// At least one pointer token is currently asserted.
    pub pointer_active: bool,
}

#[derive(Debug, Default)]
struct TrackerState {
    /// Held virtual keys. Array-backed set with linear scan; bounded by the
    /// number of keys a person can physically hold down.
    keys_down: Vec<Key>,
    /// Asserted pointer tokens, indexed by `PointerToken::index`.
    pointer_active: [bool; PointerToken::COUNT],
    /// Per-token count of assertions from a second physical source.
    pointer_duplicates: [u8; PointerToken::COUNT],
    /// Start of the currently open merged-active interval.
    interval_start: Option<Instant>,
    /// Merged-active time accumulated since the last reset.
    accumulated: Duration,
}

impl TrackerState {
    fn keyboard_idle(&self) -> bool {
        self.keys_down.is_empty()
    }

    fn pointer_idle(&self) -> bool {
        !self.pointer_active.iter().any(|&asserted| asserted)
    }

    /// Opens the merged interval if none is open. Returns whether a new
    /// interval was actually opened.
    fn open_interval(&mut self, now: Instant) -> bool {
        if self.interval_start.is_some() {
            return false;
        }
        self.interval_start = Some(now);
        true
    }

    /// Closes the merged interval, folding its elapsed time into the
    /// accumulator. A close with no open start contributes zero; the
    /// accumulator never goes backwards.
    fn close_interval(&mut self, now: Instant) {
        if let Some(start) = self.interval_start.take() {
            self.accumulated += now.saturating_duration_since(start);
        }
    }
}

/// Concurrent tracker merging keyboard and pointer activity into one
/// interval timeline.
///
/// The hosting application constructs one instance and shares it (via
/// `Arc`) with the input listener, the foreground-switch detector and the
/// reset scheduler. No component reads or writes the containers directly;
/// all interaction goes through the operations below.
pub struct ActivityTracker {
    state: Mutex<TrackerState>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TrackerState::default()),
        }
    }

    /// Dispatches a classified event to the matching operation.
    pub fn apply(&self, event: ActivityEvent) {
        self.apply_at(event, Instant::now());
    }

    /// Timestamp-explicit form of [`apply`](Self::apply).
    pub fn apply_at(&self, event: ActivityEvent, now: Instant) {
        match event {
            ActivityEvent::KeyDown(key) => {
                self.on_key_down_at(key, now);
            }
            ActivityEvent::KeyUp(key) => self.on_key_up_at(key, now),
            ActivityEvent::ButtonDown(token) => {
                self.activate_at(token, now);
            }
            ActivityEvent::ButtonUp(token) => self.deactivate_at(token, now),
            ActivityEvent::WheelTick => {
                self.activate_at(PointerToken::Wheel, now);
            }
            ActivityEvent::PointerMoved => {
                self.activate_at(PointerToken::Movement, now);
            }
        }
    }

    /// Records a key transitioning to the down state.
    ///
    /// A down event for a key that is already held is OS auto-repeat and is
    /// ignored, so a held key can never re-open an interval or double-count.
    /// Returns whether this opened a new merged interval.
    pub fn on_key_down(&self, key: Key) -> bool {
        self.on_key_down_at(key, Instant::now())
    }

    pub fn on_key_down_at(&self, key: Key, now: Instant) -> bool {
        let mut state = self.state.lock();
        if state.keys_down.contains(&key) {
            return false;
        }
        let mut opened = false;
        if state.keyboard_idle() && state.pointer_idle() {
            opened = state.open_interval(now);
        }
        state.keys_down.push(key);
        opened
    }

    /// Records a key release.
    ///
    /// A release for a key that is not tracked as held is spurious (the
    /// press can be lost to a focus change) and is ignored without touching
    /// the accumulator. When the last key goes up and the pointer is also
    /// idle, the merged interval closes and its elapsed time is accumulated.
    pub fn on_key_up(&self, key: Key) {
        self.on_key_up_at(key, Instant::now());
    }

    pub fn on_key_up_at(&self, key: Key, now: Instant) {
        let mut state = self.state.lock();
        let Some(position) = state.keys_down.iter().position(|&held| held == key) else {
            return;
        };
        state.keys_down.swap_remove(position);
        if state.keyboard_idle() && state.pointer_idle() {
            state.close_interval(now);
        }
    }

    /// Asserts a pointer token.
    ///
    /// For buttons, a second assertion while the token is already active
    /// records a duplicate source (touchpad and mouse holding the same
    /// button) and changes nothing structurally. For the wheel and movement
    /// tokens the second occurrence is the closing edge of the burst
    /// instead: scroll and motion records are repeated discrete samples, not
    /// press/release pairs. Returns whether a new merged interval opened.
    pub fn activate(&self, token: PointerToken) -> bool {
        self.activate_at(token, Instant::now())
    }

    pub fn activate_at(&self, token: PointerToken, now: Instant) -> bool {
        let mut state = self.state.lock();
        if state.pointer_active[token.index()] {
            if token.is_burst() {
                // Second sample of an active burst: the burst ended.
                state.pointer_active[token.index()] = false;
                if state.pointer_idle() && state.keyboard_idle() {
                    state.close_interval(now);
                }
            } else {
                let index = token.index();
                state.pointer_duplicates[index] = state.pointer_duplicates[index].saturating_add(1);
            }
            return false;
        }
        let mut opened = false;
        if state.pointer_idle() && state.keyboard_idle() {
            opened = state.open_interval(now);
        }
        state.pointer_active[token.index()] = true;
        opened
    }

    /// Releases a pointer token.
    ///
    /// If a duplicate source still asserts the token, one duplicate is
    /// consumed and the token stays active; the token only leaves the set
    /// once no source holds it. A release for an inactive token is ignored.
    /// When the set empties and the keyboard is idle, the merged interval
    /// closes exactly as on the keyboard path.
    pub fn deactivate(&self, token: PointerToken) {
        self.deactivate_at(token, Instant::now());
    }

    pub fn deactivate_at(&self, token: PointerToken, now: Instant) {
        let mut state = self.state.lock();
        if !state.pointer_active[token.index()] {
            return;
        }
        if state.pointer_duplicates[token.index()] > 0 {
            state.pointer_duplicates[token.index()] -= 1;
            return;
        }
        state.pointer_active[token.index()] = false;
        if state.pointer_idle() && state.keyboard_idle() {
            state.close_interval(now);
        }
    }

    /// Foreground-application switch hook.
    ///
    /// Unconditionally restarts the open interval at `now`, without emitting
    /// accumulated time and without touching the key or pointer sets: from
    /// this instant, activity is attributed to the newly focused
    /// application, whether or not keys or buttons are currently held.
    pub fn on_app_switched(&self) {
        self.on_app_switched_at(Instant::now());
    }

    pub fn on_app_switched_at(&self, now: Instant) {
        let mut state = self.state.lock();
        state.interval_start = Some(now);
    }

    /// Zeroes the accumulator and the interval start.
    ///
    /// Called by the periodic scheduler after the sink has sampled. Keys and
    /// buttons that are physically still held stay tracked; only the clocks
    /// reset, so an interval that is logically still open restarts its
    /// timing and contributes nothing for the span before the reset.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.interval_start = None;
        state.accumulated = Duration::ZERO;
    }

    /// Total merged-active time since the last reset, in milliseconds.
    pub fn accumulated_ms(&self) -> u64 {
        self.state.lock().accumulated.as_millis() as u64
    }

    /// Whether at least one key is currently held.
    pub fn is_keyboard_active(&self) -> bool {
        !self.state.lock().keyboard_idle()
    }

    /// Whether at least one pointer token is currently asserted.
    pub fn is_pointer_active(&self) -> bool {
        !self.state.lock().pointer_idle()
    }

    /// Number of distinct keys currently held.
    pub fn keys_down(&self) -> usize {
        self.state.lock().keys_down.len()
    }

    /// Takes a consistent snapshot for the persistence sink.
    pub fn sample(&self) -> ActivitySnapshot {
        let state = self.state.lock();
        ActivitySnapshot {
            accumulated_ms: state.accumulated.as_millis() as u64,
            keyboard_active: !state.keyboard_idle(),
            pointer_active: !state.pointer_idle(),
        }
    }
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}
