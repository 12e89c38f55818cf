//! EventSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for sinks.

use crate::{EventRecord, PipelineError};

/// Event output trait
///
/// All sink implementations must implement this trait.
#[trait_variant::make(EventSink: Send)]
pub trait LocalEventSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write a resolved gesture event
    ///
    /// # Errors
    /// Returns write error (should include context)
    async fn write(&mut self, record: &EventRecord) -> Result<(), PipelineError>;

    /// Flush buffer (if any)
    async fn flush(&mut self) -> Result<(), PipelineError>;

    /// Close sink
    async fn close(&mut self) -> Result<(), PipelineError>;
}
