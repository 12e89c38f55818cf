//! Pipeline statistics and metrics.

use std::time::Duration;

use observability::GestureStats;

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Total gesture events emitted
    pub events_emitted: u64,

    /// Total poll-loop iterations
    pub polls: u64,

    /// Total duration of the pipeline run
    pub duration: Duration,

    /// Number of sinks that received events
    pub active_sinks: usize,

    /// Per-gesture tally
    pub gesture_stats: GestureStats,
}

impl PipelineStats {
    /// Gesture events per minute
    pub fn events_per_minute(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.events_emitted as f64 / self.duration.as_secs_f64() * 60.0
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        let summary = self.gesture_stats.summary();

        println!("\n=== Pipeline Statistics ===\n");
        println!("Overview:");
        println!("  Duration: {:.2}s", self.duration.as_secs_f64());
        println!("  Poll cycles: {}", self.polls);
        println!("  Events emitted: {}", self.events_emitted);
        println!("  Events/min: {:.2}", self.events_per_minute());
        println!("  Active sinks: {}", self.active_sinks);
        println!("  Bus errors: {}", summary.bus_errors);

        if !summary.per_gesture.is_empty() {
            println!("\nGestures:");
            for (name, count) in &summary.per_gesture {
                println!("  {name}: {count}");
            }
        }

        println!();
    }
}
