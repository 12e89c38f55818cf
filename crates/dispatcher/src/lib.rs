//! # Dispatcher
//!
//! Event distribution module.
//!
//! Responsibilities:
//! - Consume resolved `EventRecord`s
//! - Fan-out to multiple sinks
//! - Isolate slow sinks, never block the poll loop

pub mod dispatcher;
pub mod error;
pub mod handle;
pub mod metrics;
pub mod sinks;

pub use contracts::{EventRecord, EventSink};
pub use dispatcher::{create_dispatcher, Dispatcher, DispatcherBuilder, DispatcherConfig};
pub use error::DispatcherError;
pub use handle::SinkHandle;
pub use metrics::{MetricsSnapshot, SinkMetrics};
pub use sinks::{FileSink, LogSink};
