//! # PAJ7620
//!
//! PAJ7620 gesture sensor driver.
//!
//! Responsibilities:
//! - Wake-up, part-id check and register bring-up over a [`GestureBus`]
//! - Gesture status reads with explicit bus-error surfacing
//! - Provide unified bus abstraction for real hardware and tests
//!
//! ## Feature Flags
//!
//! - `linux-i2c`: Enable the real Linux I2C bus (requires i2cdev crate)

pub mod driver;
pub mod mock_bus;
pub mod registers;

#[cfg(feature = "linux-i2c")]
pub mod i2c_bus;

pub use contracts::{GestureBus, GestureFlags, GestureReader, PipelineError};
pub use driver::Paj7620;
pub use mock_bus::{MockBus, MockBusConfig};
pub use registers::{Bank, Register, GESTURE_MODE_INIT, PART_ID};

#[cfg(feature = "linux-i2c")]
pub use i2c_bus::LinuxI2cBus;

/// Result alias
pub type Result<T> = std::result::Result<T, PipelineError>;
