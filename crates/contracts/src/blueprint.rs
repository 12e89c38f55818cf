//! PipelineBlueprint - Config Loader output
//!
//! Describes the complete pipeline configuration: sensor bus settings,
//! resolver tuning, output routing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ResolverConfig;

/// Config version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete pipeline configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineBlueprint {
    /// Config version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Sensor bus settings
    pub sensor: SensorSettings,

    /// Resolver tuning
    #[serde(default)]
    pub resolver: ResolverSettings,

    /// Output routing
    pub sinks: Vec<SinkConfig>,
}

/// Sensor bus settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorSettings {
    /// Identifier used in logs and metrics
    #[serde(default = "default_sensor_id")]
    pub id: String,

    /// Bus device path (Linux I2C mode)
    #[serde(default = "default_bus_path")]
    pub bus_path: String,

    /// 7-bit I2C address
    #[serde(default = "default_address")]
    pub address: u8,

    /// Poll loop interval (ms), must be > 0
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// One-shot retry of a failed bus transaction
    #[serde(default)]
    pub retry_on_bus_error: bool,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            id: default_sensor_id(),
            bus_path: default_bus_path(),
            address: default_address(),
            poll_interval_ms: default_poll_interval_ms(),
            retry_on_bus_error: false,
        }
    }
}

fn default_sensor_id() -> String {
    "paj7620".to_string()
}

fn default_bus_path() -> String {
    "/dev/i2c-1".to_string()
}

fn default_address() -> u8 {
    0x73
}

fn default_poll_interval_ms() -> u64 {
    100
}

/// Resolver tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Settle window before the lookahead read (ms), must be > 0
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}

fn default_settle_ms() -> u64 {
    800
}

/// Sink output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink name
    pub name: String,

    /// Sink type
    pub sink_type: SinkType,

    /// Queue capacity
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Type-specific params
    #[serde(default)]
    pub params: HashMap<String, String>,
}

fn default_queue_capacity() -> usize {
    100
}

/// Sink type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// Console output via tracing
    Log,
    /// JSON-lines event log on disk
    File,
}

impl PipelineBlueprint {
    /// Build the runtime resolver config from blueprint data
    pub fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig::with_settle_ms(self.resolver.settle_ms)
    }
}
