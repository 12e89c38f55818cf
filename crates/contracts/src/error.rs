//! Layered error definitions
//!
//! Categorized by source: config / bus / sensor / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum PipelineError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Bus / Sensor Errors =====
    /// Bus could not be opened
    #[error("bus open error for '{device}': {message}")]
    BusOpen { device: String, message: String },

    /// I2C transaction failed. Never folded into "no gesture".
    #[error("bus transaction error at register {register:#04x}: {message}")]
    Bus { register: u8, message: String },

    /// Part-id check at init found a different chip
    #[error("unexpected device id: expected {expected:#06x}, found {found:#06x}")]
    UnexpectedDevice { expected: u16, found: u16 },

    // ===== Sink Errors =====
    /// Sink write error
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl PipelineError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create bus open error
    pub fn bus_open(device: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BusOpen {
            device: device.into(),
            message: message.into(),
        }
    }

    /// Create bus transaction error
    pub fn bus(register: u8, message: impl Into<String>) -> Self {
        Self::Bus {
            register,
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// True for errors raised by a failed bus transaction (retryable)
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Self::Bus { .. })
    }
}
