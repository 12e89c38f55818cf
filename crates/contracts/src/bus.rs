//! GestureBus / GestureReader traits - sensor access abstractions
//!
//! `GestureBus` is the raw register transport against the sensor's
//! documented register map. `GestureReader` is the narrow read surface the
//! resolver needs, implemented by the driver on top of any bus.
//! Supports unified handling of the real Linux I2C bus and the mock bus.

use crate::{GestureFlags, PipelineError};

/// Raw register transport to the sensor
///
/// Implementations address the sensor at its fixed 7-bit I2C address.
/// Transactions are synchronous; a transaction is sub-millisecond and the
/// only long wait in the pipeline (the settle window) lives above the bus.
///
/// # Design Principles
///
/// 1. **Decoupling**: register access is separated from gesture semantics
/// 2. **Unified Interface**: mock and real buses expose the same API
/// 3. **Explicit failure**: a failed transaction is an error, never a zero
///    read
pub trait GestureBus: Send {
    /// Read `buf.len()` bytes starting at `register`
    ///
    /// # Errors
    /// [`PipelineError::Bus`] on a failed transaction.
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), PipelineError>;

    /// Write a single byte to `register`
    ///
    /// # Errors
    /// [`PipelineError::Bus`] on a failed transaction.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), PipelineError>;
}

/// Read surface consumed by the gesture resolver
///
/// The resolver issues at most two primary reads per cycle (initial +
/// lookahead) and one secondary read on the empty path. The driver
/// implements this; tests substitute a scripted reader.
pub trait GestureReader: Send {
    /// Read the primary gesture status byte
    fn read_gesture(&mut self) -> Result<GestureFlags, PipelineError>;

    /// Read the secondary status byte and report whether the wave flag is set
    fn read_wave(&mut self) -> Result<bool, PipelineError>;
}
