//! Config validation
//!
//! Validation rules:
//! - sensor address is a valid 7-bit I2C address
//! - poll_interval_ms > 0
//! - settle_ms > 0
//! - sink names are non-empty and unique
//! - file sink path param is non-empty when given

use std::collections::HashSet;

use contracts::{PipelineBlueprint, PipelineError, SinkType};

/// Validate a PipelineBlueprint
///
/// Returns the first violation encountered, or Ok(()).
pub fn validate(blueprint: &PipelineBlueprint) -> Result<(), PipelineError> {
    validate_sensor(blueprint)?;
    validate_resolver(blueprint)?;
    validate_sinks(blueprint)?;
    Ok(())
}

/// Validate sensor bus settings
fn validate_sensor(blueprint: &PipelineBlueprint) -> Result<(), PipelineError> {
    let sensor = &blueprint.sensor;

    if sensor.id.is_empty() {
        return Err(PipelineError::config_validation(
            "sensor.id",
            "sensor id cannot be empty",
        ));
    }

    if sensor.address > 0x7F {
        return Err(PipelineError::config_validation(
            "sensor.address",
            format!(
                "address {:#04x} is not a 7-bit I2C address",
                sensor.address
            ),
        ));
    }

    if sensor.poll_interval_ms == 0 {
        return Err(PipelineError::config_validation(
            "sensor.poll_interval_ms",
            "poll_interval_ms must be > 0",
        ));
    }

    Ok(())
}

/// Validate resolver tuning
fn validate_resolver(blueprint: &PipelineBlueprint) -> Result<(), PipelineError> {
    if blueprint.resolver.settle_ms == 0 {
        return Err(PipelineError::config_validation(
            "resolver.settle_ms",
            "settle_ms must be > 0",
        ));
    }
    Ok(())
}

/// Validate sink configuration
fn validate_sinks(blueprint: &PipelineBlueprint) -> Result<(), PipelineError> {
    let mut seen = HashSet::new();

    for (idx, sink) in blueprint.sinks.iter().enumerate() {
        if sink.name.is_empty() {
            return Err(PipelineError::config_validation(
                format!("sinks[{idx}].name"),
                "sink name cannot be empty",
            ));
        }

        if !seen.insert(&sink.name) {
            return Err(PipelineError::config_validation(
                format!("sinks[id={}]", sink.name),
                "duplicate sink name",
            ));
        }

        if sink.sink_type == SinkType::File {
            if let Some(path) = sink.params.get("path") {
                if path.is_empty() {
                    return Err(PipelineError::config_validation(
                        format!("sinks[{}].params.path", sink.name),
                        "file sink path cannot be empty",
                    ));
                }
            }
        }
    }

    Ok(())
}
