//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    sensor_id: String,
    bus_path: String,
    settle_ms: u64,
    sink_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(blueprint) => {
            let warnings = collect_warnings(&blueprint);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    version: format!("{:?}", blueprint.version),
                    sensor_id: blueprint.sensor.id.clone(),
                    bus_path: blueprint.sensor.bus_path.clone(),
                    settle_ms: blueprint.resolver.settle_ms,
                    sink_count: blueprint.sinks.len(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(blueprint: &contracts::PipelineBlueprint) -> Vec<String> {
    let mut warnings = Vec::new();

    // Check for empty sinks
    if blueprint.sinks.is_empty() {
        warnings.push("No sinks configured - resolved gestures will be dropped".to_string());
    }

    // A settle window shorter than the poll interval defeats the lookahead
    if blueprint.resolver.settle_ms < blueprint.sensor.poll_interval_ms {
        warnings.push(format!(
            "settle_ms ({}) is shorter than poll_interval_ms ({}) - compound gestures may be missed",
            blueprint.resolver.settle_ms, blueprint.sensor.poll_interval_ms
        ));
    }

    if blueprint.sensor.address != 0x73 {
        warnings.push(format!(
            "sensor.address {:#04x} differs from the PAJ7620 default 0x73",
            blueprint.sensor.address
        ));
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Sensor: {}", summary.sensor_id);
            println!("  Bus: {}", summary.bus_path);
            println!("  Settle window: {}ms", summary.settle_ms);
            println!("  Sinks: {}", summary.sink_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = write_config(
            r#"
[sensor]
id = "paj7620"

[[sinks]]
name = "console"
sink_type = "log"
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: false,
        };
        let result = validate_config(&args);
        assert!(result.valid);
        assert_eq!(result.summary.unwrap().sensor_id, "paj7620");
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: "/nonexistent/config.toml".into(),
            json: false,
        };
        let result = validate_config(&args);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("File not found"));
    }

    #[test]
    fn test_validate_collects_short_settle_warning() {
        let file = write_config(
            r#"
[sensor]
poll_interval_ms = 100

[resolver]
settle_ms = 50

[[sinks]]
name = "console"
sink_type = "log"
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: false,
        };
        let result = validate_config(&args);
        assert!(result.valid);
        let warnings = result.warnings.unwrap();
        assert!(warnings.iter().any(|w| w.contains("settle_ms")));
    }
}
