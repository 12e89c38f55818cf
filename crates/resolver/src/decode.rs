//! Status byte decode table
//!
//! One entry per primitive flag, replacing the per-direction branch
//! duplication of classic PAJ7620 sketches. A status byte that matches no
//! entry (zero, or several flags at once) falls through to the
//! secondary-register path in the resolver.

use contracts::{GestureEvent, GestureFlags};

/// How a matched flag is turned into an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvePolicy {
    /// Settle, then one lookahead read; Forward/Backward supersede
    Lookahead,
    /// Settle, then emit as-is (motion already completed)
    Settle,
    /// Emit at once, no delay
    Immediate,
}

/// Decode table row
#[derive(Debug, Clone, Copy)]
pub struct DecodeEntry {
    pub flag: GestureFlags,
    pub event: GestureEvent,
    pub policy: ResolvePolicy,
}

const fn entry(flag: GestureFlags, event: GestureEvent, policy: ResolvePolicy) -> DecodeEntry {
    DecodeEntry {
        flag,
        event,
        policy,
    }
}

/// Primary status byte decode table.
///
/// Direction flags carry the lookahead policy: the sensor may supersede them
/// with a motion-completion flag within the settle window. Rotations are
/// final the moment they are reported.
pub const DECODE_TABLE: &[DecodeEntry] = &[
    entry(GestureFlags::RIGHT, GestureEvent::Right, ResolvePolicy::Lookahead),
    entry(GestureFlags::LEFT, GestureEvent::Left, ResolvePolicy::Lookahead),
    entry(GestureFlags::UP, GestureEvent::Up, ResolvePolicy::Lookahead),
    entry(GestureFlags::DOWN, GestureEvent::Down, ResolvePolicy::Lookahead),
    entry(GestureFlags::FORWARD, GestureEvent::Forward, ResolvePolicy::Settle),
    entry(GestureFlags::BACKWARD, GestureEvent::Backward, ResolvePolicy::Settle),
    entry(GestureFlags::CLOCKWISE, GestureEvent::Clockwise, ResolvePolicy::Immediate),
    entry(
        GestureFlags::ANTI_CLOCKWISE,
        GestureEvent::AntiClockwise,
        ResolvePolicy::Immediate,
    ),
];

/// Match a status byte against the decode table (whole-byte equality, as the
/// sensor reports one flag per clean detection)
pub fn decode(status: GestureFlags) -> Option<&'static DecodeEntry> {
    DECODE_TABLE.iter().find(|entry| entry.flag == status)
}

/// The override rule: a lookahead read equal to Forward or Backward
/// supersedes the original direction
pub fn completion_override(lookahead: GestureFlags) -> Option<GestureEvent> {
    match lookahead {
        f if f == GestureFlags::FORWARD => Some(GestureEvent::Forward),
        f if f == GestureFlags::BACKWARD => Some(GestureEvent::Backward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_primary_flags() {
        for bit in 0..8 {
            let status = GestureFlags(1 << bit);
            assert!(decode(status).is_some(), "bit {bit} missing from table");
        }
    }

    #[test]
    fn test_direction_flags_take_lookahead_policy() {
        for flag in [
            GestureFlags::RIGHT,
            GestureFlags::LEFT,
            GestureFlags::UP,
            GestureFlags::DOWN,
        ] {
            assert_eq!(decode(flag).unwrap().policy, ResolvePolicy::Lookahead);
        }
    }

    #[test]
    fn test_rotations_are_immediate() {
        assert_eq!(
            decode(GestureFlags::CLOCKWISE).unwrap().policy,
            ResolvePolicy::Immediate
        );
        assert_eq!(
            decode(GestureFlags::ANTI_CLOCKWISE).unwrap().policy,
            ResolvePolicy::Immediate
        );
    }

    #[test]
    fn test_multi_flag_byte_decodes_to_nothing() {
        assert!(decode(GestureFlags(0x03)).is_none());
        assert!(decode(GestureFlags::EMPTY).is_none());
    }

    #[test]
    fn test_completion_override_only_for_motion_flags() {
        assert_eq!(
            completion_override(GestureFlags::FORWARD),
            Some(GestureEvent::Forward)
        );
        assert_eq!(
            completion_override(GestureFlags::BACKWARD),
            Some(GestureEvent::Backward)
        );
        assert_eq!(completion_override(GestureFlags::LEFT), None);
        assert_eq!(completion_override(GestureFlags::EMPTY), None);
        // Forward plus noise is not a clean completion
        assert_eq!(completion_override(GestureFlags(0x11)), None);
    }
}
