//! Gesture flags and resolved events
//!
//! `GestureFlags` mirrors the PAJ7620 gesture status byte (bank 0, register
//! 0x43) bit for bit. `GestureEvent` is the resolved, user-facing
//! classification produced once per polling cycle; it has no persistent
//! identity, it is emitted and discarded.

use serde::{Deserialize, Serialize};

/// Raw gesture status byte, immutable once read.
///
/// The sensor reports at most one flag per clean detection; a byte with
/// several bits set falls outside the primary decode path and is handled
/// like an empty read (secondary-register check).
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureFlags(pub u8);

impl GestureFlags {
    pub const EMPTY: Self = Self(0);

    pub const RIGHT: Self = Self(1 << 0);
    pub const LEFT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);
    pub const FORWARD: Self = Self(1 << 4);
    pub const BACKWARD: Self = Self(1 << 5);
    pub const CLOCKWISE: Self = Self(1 << 6);
    pub const ANTI_CLOCKWISE: Self = Self(1 << 7);

    /// Wave flag, bit 0 of the secondary status byte (register 0x44)
    pub const WAVE: Self = Self(1 << 0);

    /// Raw byte value
    pub fn bits(self) -> u8 {
        self.0
    }

    /// No flag set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exactly one flag set
    pub fn is_single(self) -> bool {
        self.0.count_ones() == 1
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::fmt::Debug for GestureFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GestureFlags({:#010b})", self.0)
    }
}

impl From<u8> for GestureFlags {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// Resolved gesture classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEvent {
    Right,
    Left,
    Up,
    Down,
    Forward,
    Backward,
    Clockwise,
    AntiClockwise,
    Wave,
}

impl GestureEvent {
    /// All resolvable gestures, in status-bit order (Wave last)
    pub const ALL: [GestureEvent; 9] = [
        GestureEvent::Right,
        GestureEvent::Left,
        GestureEvent::Up,
        GestureEvent::Down,
        GestureEvent::Forward,
        GestureEvent::Backward,
        GestureEvent::Clockwise,
        GestureEvent::AntiClockwise,
        GestureEvent::Wave,
    ];

    /// User-facing name, as printed by sinks
    pub fn name(self) -> &'static str {
        match self {
            GestureEvent::Right => "Right",
            GestureEvent::Left => "Left",
            GestureEvent::Up => "Up",
            GestureEvent::Down => "Down",
            GestureEvent::Forward => "Forward",
            GestureEvent::Backward => "Backward",
            GestureEvent::Clockwise => "Clockwise",
            GestureEvent::AntiClockwise => "Anti-clockwise",
            GestureEvent::Wave => "Wave",
        }
    }
}

impl std::fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
