//! Button state sampled once per frame.
//!
//! The handheld reports buttons as a bitmask. The game only ever looks at the
//! edges since the previous sample: which buttons went down and which came
//! up. [`KeyTracker`] folds host key events into a held set, and each
//! [`InputSource::sample`] diffs it against the set seen at the last sample.
//! A key pressed and released between two samples produces no edge.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Button bitmask in the handheld's key register order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const A: Buttons = Buttons(1 << 0);
    pub const B: Buttons = Buttons(1 << 1);
    pub const SELECT: Buttons = Buttons(1 << 2);
    pub const START: Buttons = Buttons(1 << 3);
    pub const RIGHT: Buttons = Buttons(1 << 4);
    pub const LEFT: Buttons = Buttons(1 << 5);
    pub const UP: Buttons = Buttons(1 << 6);
    pub const DOWN: Buttons = Buttons(1 << 7);
    pub const R: Buttons = Buttons(1 << 8);
    pub const L: Buttons = Buttons(1 << 9);

    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

impl Not for Buttons {
    type Output = Buttons;

    fn not(self) -> Buttons {
        Buttons(!self.0)
    }
}

/// Edges since the previous sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub pressed: Buttons,
    pub released: Buttons,
}

impl InputSnapshot {
    pub fn new(pressed: Buttons, released: Buttons) -> Self {
        Self { pressed, released }
    }

    pub fn pressed(buttons: Buttons) -> Self {
        Self::new(buttons, Buttons::NONE)
    }

    pub fn released(buttons: Buttons) -> Self {
        Self::new(Buttons::NONE, buttons)
    }
}

/// Anything that can be polled for button edges once per frame
pub trait InputSource {
    fn sample(&mut self) -> InputSnapshot;
}

/// Held keys, plus what was held at the previous sample
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: Buttons,
    sampled: Buttons,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, button: Buttons) {
        self.held |= button;
    }

    pub fn key_up(&mut self, button: Buttons) {
        self.held = self.held & !button;
    }
}

impl InputSource for KeyTracker {
    fn sample(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot::new(self.held & !self.sampled, self.sampled & !self.held);
        self.sampled = self.held;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_combine() {
        let both = Buttons::UP | Buttons::DOWN;
        assert!(both.contains(Buttons::UP));
        assert!(both.contains(Buttons::DOWN));
        assert!(!both.contains(Buttons::A));
        assert_eq!(both, Buttons(0b1100_0000));
        assert_eq!(both & !Buttons::UP, Buttons::DOWN);
    }

    #[test]
    fn test_press_is_reported_once() {
        let mut keys = KeyTracker::new();
        keys.key_down(Buttons::UP);
        assert_eq!(keys.sample(), InputSnapshot::pressed(Buttons::UP));
        assert_eq!(keys.sample(), InputSnapshot::default());
        assert!(keys.held.contains(Buttons::UP));
    }

    #[test]
    fn test_release_is_reported_once() {
        let mut keys = KeyTracker::new();
        keys.key_down(Buttons::DOWN);
        keys.sample();
        keys.key_up(Buttons::DOWN);
        assert_eq!(keys.sample(), InputSnapshot::released(Buttons::DOWN));
        assert_eq!(keys.sample(), InputSnapshot::default());
    }

    #[test]
    fn test_repeat_does_not_press_again() {
        let mut keys = KeyTracker::new();
        keys.key_down(Buttons::DOWN);
        keys.sample();
        keys.key_down(Buttons::DOWN);
        assert_eq!(keys.sample().pressed, Buttons::NONE);
    }

    #[test]
    fn test_release_without_press_is_no_op() {
        let mut keys = KeyTracker::new();
        keys.key_up(Buttons::UP);
        assert_eq!(keys.sample().released, Buttons::NONE);
    }

    #[test]
    fn test_tap_between_samples_has_no_edges() {
        let mut keys = KeyTracker::new();
        keys.key_down(Buttons::UP);
        keys.key_up(Buttons::UP);
        assert_eq!(keys.sample(), InputSnapshot::default());
        assert_eq!(keys.held, Buttons::NONE);
    }

    #[test]
    fn test_release_and_repress_between_samples_is_held() {
        let mut keys = KeyTracker::new();
        keys.key_down(Buttons::UP);
        keys.sample();
        keys.key_up(Buttons::UP);
        keys.key_down(Buttons::UP);
        assert_eq!(keys.sample(), InputSnapshot::default());
    }
}
