//! LogSink - prints resolved gestures via tracing
//!
//! The "text console" output channel: receives the gesture name, nothing
//! else is promised.

use contracts::{EventRecord, EventSink, PipelineError};
use tracing::{info, instrument};

/// Sink that logs resolved gestures
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl EventSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "log_sink_write",
        skip(self, record),
        fields(sink = %self.name, seq = record.seq)
    )]
    async fn write(&mut self, record: &EventRecord) -> Result<(), PipelineError> {
        info!(
            sink = %self.name,
            seq = record.seq,
            t = format!("{:.3}", record.timestamp),
            gesture = %record.event,
            "Gesture"
        );
        Ok(())
    }

    #[instrument(name = "log_sink_flush", skip(self))]
    async fn flush(&mut self) -> Result<(), PipelineError> {
        // Nothing to flush for log sink
        Ok(())
    }

    #[instrument(name = "log_sink_close", skip(self))]
    async fn close(&mut self) -> Result<(), PipelineError> {
        info!(sink = %self.name, "LogSink closed");
        Ok(())
    }
}
