//! Sink metrics for observability

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Counters for a single sink worker
///
/// Shared between the handle (producer side) and the worker task; all
/// updates are relaxed, the numbers are diagnostic only.
#[derive(Debug, Default)]
pub struct SinkMetrics {
    queue_len: AtomicUsize,
    written: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

impl SinkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful write
    pub fn record_write(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed write
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an event dropped by a full queue
    pub fn record_drop(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Track the current queue depth
    pub fn set_queue_len(&self, len: usize) {
        self.queue_len.store(len, Ordering::Relaxed);
    }

    pub fn queue_len(&self) -> usize {
        self.queue_len.load(Ordering::Relaxed)
    }

    pub fn write_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Point-in-time copy for reporting
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queue_len: self.queue_len(),
            write_count: self.write_count(),
            failure_count: self.failure_count(),
            dropped_count: self.dropped_count(),
        }
    }
}

/// Snapshot of sink metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub queue_len: usize,
    pub write_count: u64,
    pub failure_count: u64,
    pub dropped_count: u64,
}

impl MetricsSnapshot {
    /// Share of attempted writes that were lost (failed or dropped)
    pub fn loss_rate(&self) -> f64 {
        let attempted = self.write_count + self.failure_count + self.dropped_count;
        if attempted == 0 {
            return 0.0;
        }
        (self.failure_count + self.dropped_count) as f64 / attempted as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_counters() {
        let metrics = SinkMetrics::new();
        metrics.record_write();
        metrics.record_write();
        metrics.record_failure();
        metrics.record_drop();
        metrics.set_queue_len(3);

        let snap = metrics.snapshot();
        assert_eq!(snap.write_count, 2);
        assert_eq!(snap.failure_count, 1);
        assert_eq!(snap.dropped_count, 1);
        assert_eq!(snap.queue_len, 3);
    }

    #[test]
    fn test_loss_rate() {
        let metrics = SinkMetrics::new();
        metrics.record_write();
        metrics.record_write();
        metrics.record_write();
        metrics.record_drop();

        assert!((metrics.snapshot().loss_rate() - 0.25).abs() < f64::EPSILON);
        assert_eq!(SinkMetrics::new().snapshot().loss_rate(), 0.0);
    }
}
