//! EventRecord - Resolver output
//!
//! The dispatched envelope around a resolved gesture.

use serde::{Deserialize, Serialize};

use crate::GestureEvent;

/// A resolved gesture, stamped for ordering and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic event counter (per pipeline run)
    pub seq: u64,

    /// Seconds since pipeline start - primary clock
    pub timestamp: f64,

    /// The resolved gesture
    pub event: GestureEvent,
}

impl EventRecord {
    pub fn new(seq: u64, timestamp: f64, event: GestureEvent) -> Self {
        Self {
            seq,
            timestamp,
            event,
        }
    }
}
