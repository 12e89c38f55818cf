//! Gesture pipeline metrics collection
//!
//! Records resolver and dispatcher activity through the `metrics` facade and
//! keeps an in-process aggregate for the end-of-run summary.

use std::collections::BTreeMap;

use contracts::GestureEvent;
use metrics::{counter, gauge};

/// Record a resolved gesture
///
/// Call once per emitted event.
pub fn record_gesture_event(event: GestureEvent) {
    counter!("paj7620_gestures_total").increment(1);
    counter!("paj7620_gesture_total", "gesture" => event.name()).increment(1);
}

/// Record one poll-loop iteration
pub fn record_poll_cycle() {
    counter!("paj7620_poll_cycles_total").increment(1);
}

/// Record a lookahead read issued for a direction flag
pub fn record_lookahead(superseded: bool) {
    counter!("paj7620_lookahead_total").increment(1);
    if superseded {
        counter!("paj7620_lookahead_superseded_total").increment(1);
    }
}

/// Record a failed bus transaction
pub fn record_bus_error(consecutive: u64) {
    counter!("paj7620_bus_errors_total").increment(1);
    gauge!("paj7620_bus_errors_consecutive").set(consecutive as f64);
}

/// Record an event dropped by a full sink queue
pub fn record_event_dropped(sink_name: &str) {
    counter!("paj7620_events_dropped_total", "sink" => sink_name.to_string()).increment(1);
}

/// In-process per-gesture tally for the run summary
#[derive(Debug, Clone, Default)]
pub struct GestureStats {
    counts: BTreeMap<&'static str, u64>,
    bus_errors: u64,
}

impl GestureStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a resolved gesture
    pub fn record_event(&mut self, event: GestureEvent) {
        *self.counts.entry(event.name()).or_insert(0) += 1;
    }

    /// Tally a bus error
    pub fn record_bus_error(&mut self) {
        self.bus_errors += 1;
    }

    /// Total resolved gestures
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Build the run summary
    pub fn summary(&self) -> GestureStatsSummary {
        GestureStatsSummary {
            total: self.total(),
            per_gesture: self
                .counts
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
            bus_errors: self.bus_errors,
        }
    }
}

/// Snapshot of the gesture tally
#[derive(Debug, Clone, Default)]
pub struct GestureStatsSummary {
    pub total: u64,
    pub per_gesture: Vec<(String, u64)>,
    pub bus_errors: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_tally_per_gesture() {
        let mut stats = GestureStats::new();
        stats.record_event(GestureEvent::Left);
        stats.record_event(GestureEvent::Left);
        stats.record_event(GestureEvent::Wave);

        assert_eq!(stats.total(), 3);
        let summary = stats.summary();
        assert!(summary
            .per_gesture
            .iter()
            .any(|(name, count)| name == "Left" && *count == 2));
    }

    #[test]
    fn test_stats_bus_errors() {
        let mut stats = GestureStats::new();
        stats.record_bus_error();
        stats.record_bus_error();

        let summary = stats.summary();
        assert_eq!(summary.bus_errors, 2);
        assert_eq!(summary.total, 0);
    }
}
