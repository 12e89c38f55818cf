//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    sensor: SensorInfo,
    resolver: ResolverInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sinks: Vec<SinkInfo>,
}

#[derive(Serialize)]
struct SensorInfo {
    id: String,
    bus_path: String,
    address: String,
    poll_interval_ms: u64,
    retry_on_bus_error: bool,
}

#[derive(Serialize)]
struct ResolverInfo {
    settle_ms: u64,
}

#[derive(Serialize)]
struct SinkInfo {
    name: String,
    sink_type: String,
    queue_capacity: usize,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.json {
        let info = build_config_info(&blueprint, args);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&blueprint, args);
    }

    Ok(())
}

fn build_config_info(blueprint: &contracts::PipelineBlueprint, args: &InfoArgs) -> ConfigInfo {
    let sinks = if args.sinks {
        blueprint
            .sinks
            .iter()
            .map(|s| SinkInfo {
                name: s.name.clone(),
                sink_type: format!("{:?}", s.sink_type),
                queue_capacity: s.queue_capacity,
            })
            .collect()
    } else {
        Vec::new()
    };

    ConfigInfo {
        version: format!("{:?}", blueprint.version),
        sensor: SensorInfo {
            id: blueprint.sensor.id.clone(),
            bus_path: blueprint.sensor.bus_path.clone(),
            address: format!("{:#04x}", blueprint.sensor.address),
            poll_interval_ms: blueprint.sensor.poll_interval_ms,
            retry_on_bus_error: blueprint.sensor.retry_on_bus_error,
        },
        resolver: ResolverInfo {
            settle_ms: blueprint.resolver.settle_ms,
        },
        sinks,
    }
}

fn print_config_info(blueprint: &contracts::PipelineBlueprint, args: &InfoArgs) {
    println!("\n=== Configuration Info ===\n");
    println!("Version: {:?}", blueprint.version);

    println!("\nSensor:");
    println!("  Id: {}", blueprint.sensor.id);
    println!(
        "  Bus: {} @ {:#04x}",
        blueprint.sensor.bus_path, blueprint.sensor.address
    );
    println!("  Poll interval: {}ms", blueprint.sensor.poll_interval_ms);
    println!(
        "  Retry on bus error: {}",
        blueprint.sensor.retry_on_bus_error
    );

    println!("\nResolver:");
    println!("  Settle window: {}ms", blueprint.resolver.settle_ms);

    if args.sinks {
        println!("\nSinks ({}):", blueprint.sinks.len());
        for sink in &blueprint.sinks {
            println!(
                "  - {} ({:?}, queue {})",
                sink.name, sink.sink_type, sink.queue_capacity
            );
            for (key, value) in &sink.params {
                println!("      {key} = {value}");
            }
        }
    } else {
        println!("\nSinks: {} configured (--sinks for details)", blueprint.sinks.len());
    }

    println!();
}
