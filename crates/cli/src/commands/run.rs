//! `run` command implementation.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::pipeline::{Pipeline, PipelineConfig};

/// Execute the `run` command
pub async fn run_pipeline(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    // Validate config path
    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    // Load and parse configuration
    let mut blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(ref bus) = args.bus {
        info!(bus = %bus, "Overriding I2C bus path from CLI");
        blueprint.sensor.bus_path = bus.clone();
    }
    if let Some(settle_ms) = args.settle_ms {
        info!(settle_ms, "Overriding settle window from CLI");
        blueprint.resolver.settle_ms = settle_ms;
    }

    info!(
        sensor = %blueprint.sensor.id,
        bus = %blueprint.sensor.bus_path,
        address = format!("{:#04x}", blueprint.sensor.address),
        settle_ms = blueprint.resolver.settle_ms,
        sinks = blueprint.sinks.len(),
        "Configuration loaded"
    );

    // Dry run - just validate and exit
    if args.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        print_config_summary(&blueprint);
        return Ok(());
    }

    // Build pipeline configuration
    let pipeline_config = PipelineConfig {
        blueprint,
        max_events: if args.max_events == 0 {
            None
        } else {
            Some(args.max_events)
        },
        timeout: if args.timeout == 0 {
            None
        } else {
            Some(Duration::from_secs(args.timeout))
        },
        buffer_size: args.buffer_size,
        metrics_port: if args.metrics_port == 0 {
            None
        } else {
            Some(args.metrics_port)
        },
    };

    // Create and run pipeline
    let pipeline = Pipeline::new(pipeline_config);

    // Setup graceful shutdown handler
    let shutdown_signal = setup_shutdown_signal();

    info!("Starting pipeline...");

    // Run pipeline with shutdown signal
    tokio::select! {
        result = pipeline.run() => {
            match result {
                Ok(stats) => {
                    info!(
                        events = stats.events_emitted,
                        polls = stats.polls,
                        duration_secs = stats.duration.as_secs_f64(),
                        events_per_min = format!("{:.2}", stats.events_per_minute()),
                        "Pipeline completed successfully"
                    );

                    // Print detailed statistics
                    stats.print_summary();
                }
                Err(e) => {
                    return Err(e).context("Pipeline execution failed");
                }
            }
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping pipeline...");
        }
    }

    info!("Gesture Pipeline finished");
    Ok(())
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Print configuration summary for dry-run mode
fn print_config_summary(blueprint: &contracts::PipelineBlueprint) {
    println!("\n=== Configuration Summary ===\n");
    println!("Sensor:");
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

    if !blueprint.sinks.is_empty() {
        println!("\nSinks ({}):", blueprint.sinks.len());
        for sink in &blueprint.sinks {
            println!("  - {} ({:?})", sink.name, sink.sink_type);
        }
    }

    println!();
}
