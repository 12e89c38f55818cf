//! Pipeline orchestrator - coordinates all components.
//!
//! Supports both real hardware and mock mode via feature flags.
//! When the `linux-i2c` feature is disabled, runs over a scripted mock bus.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use contracts::{EventRecord, GestureBus, PipelineBlueprint};
use paj7620::Paj7620;
use resolver::GestureResolver;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use super::PipelineStats;

/// A run of bus failures this long aborts the pipeline instead of spinning
/// on a dead bus.
const MAX_CONSECUTIVE_BUS_ERRORS: u32 = 5;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// The pipeline blueprint configuration
    pub blueprint: PipelineBlueprint,

    /// Maximum number of events to emit (None = unlimited)
    pub max_events: Option<u64>,

    /// Pipeline timeout (None = no timeout)
    pub timeout: Option<Duration>,

    /// Channel buffer size
    pub buffer_size: usize,

    /// Metrics server port (None = disabled)
    pub metrics_port: Option<u16>,
}

/// Main pipeline orchestrator
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion
    pub async fn run(self) -> Result<PipelineStats> {
        #[cfg(feature = "linux-i2c")]
        return self.run_real().await;

        #[cfg(not(feature = "linux-i2c"))]
        return self.run_mock().await;
    }

    /// Run pipeline against the real sensor bus
    #[cfg(feature = "linux-i2c")]
    async fn run_real(self) -> Result<PipelineStats> {
        use paj7620::LinuxI2cBus;

        let start_time = Instant::now();
        let sensor = &self.config.blueprint.sensor;

        // Initialize Metrics (optional)
        if let Some(port) = self.config.metrics_port {
            observability::init_metrics_only(port)?;
            info!("Metrics endpoint available on port {}", port);
        }

        info!(
            bus = %sensor.bus_path,
            address = format!("{:#04x}", sensor.address),
            "Opening I2C bus..."
        );

        let bus = LinuxI2cBus::open_at(&sensor.bus_path, sensor.address)
            .with_context(|| format!("Failed to open I2C bus at {}", sensor.bus_path))?;

        info!("I2C bus opened");

        self.run_pipeline_common(bus, start_time).await
    }

    /// Run pipeline over the scripted mock bus
    #[cfg(not(feature = "linux-i2c"))]
    async fn run_mock(self) -> Result<PipelineStats> {
        use paj7620::MockBus;

        let start_time = Instant::now();

        // Initialize Metrics (optional)
        if let Some(port) = self.config.metrics_port {
            observability::init_metrics_only(port)?;
            info!("Metrics endpoint available on port {}", port);
        }

        info!("Running in MOCK mode (no sensor hardware required)");

        let bus = MockBus::demo();

        self.run_pipeline_common(bus, start_time).await
    }

    /// Common pipeline logic shared between real and mock modes
    async fn run_pipeline_common<B: GestureBus + 'static>(
        &self,
        bus: B,
        start_time: Instant,
    ) -> Result<PipelineStats> {
        let blueprint = &self.config.blueprint;

        // Initialize Sensor
        info!("Initializing sensor...");
        let mut driver = Paj7620::new(bus).with_retry(blueprint.sensor.retry_on_bus_error);
        driver
            .init()
            .context("Failed to initialize PAJ7620 sensor")?;

        info!(
            sensor = %blueprint.sensor.id,
            "Sensor initialized, recognizing 9 gestures"
        );

        // Setup Resolver
        let resolver_config = blueprint.to_resolver_config();
        let mut resolver = GestureResolver::new(driver, resolver_config);

        info!(
            settle_ms = blueprint.resolver.settle_ms,
            poll_interval_ms = blueprint.sensor.poll_interval_ms,
            "Resolver configured"
        );

        // Setup Dispatcher
        info!("Setting up dispatcher...");
        let (event_tx, event_rx) = mpsc::channel::<EventRecord>(self.config.buffer_size);

        if blueprint.sinks.is_empty() {
            warn!("No sinks configured - resolved gestures will be dropped");
        }

        let dispatcher = dispatcher::create_dispatcher(blueprint.sinks.clone(), event_rx)
            .context("Failed to create dispatcher")?;

        let active_sinks = blueprint.sinks.len();
        let dispatcher_handle = dispatcher.spawn();

        info!(active_sinks, "Dispatcher started");

        // Start Poll Loop
        let poll_interval = Duration::from_millis(blueprint.sensor.poll_interval_ms);
        let max_events = self.config.max_events;

        #[cfg(feature = "linux-i2c")]
        info!(max_events = ?max_events, "Pipeline running (I2C mode)");

        #[cfg(not(feature = "linux-i2c"))]
        info!(max_events = ?max_events, "Pipeline running (MOCK mode)");

        let pipeline_task = async move {
            let mut stats = PipelineStats {
                active_sinks,
                ..Default::default()
            };
            let mut seq: u64 = 0;
            let mut consecutive_bus_errors: u32 = 0;

            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                stats.polls += 1;
                observability::record_poll_cycle();

                match resolver.poll_once().await {
                    Ok(Some(event)) => {
                        consecutive_bus_errors = 0;

                        let record =
                            EventRecord::new(seq, start_time.elapsed().as_secs_f64(), event);
                        seq += 1;

                        observability::record_gesture_event(event);
                        stats.gesture_stats.record_event(event);
                        stats.events_emitted += 1;

                        info!(
                            seq = record.seq,
                            t = format!("{:.3}", record.timestamp),
                            gesture = %event,
                            "Gesture resolved"
                        );

                        if event_tx.send(record).await.is_err() {
                            warn!("Dispatcher channel closed");
                            break;
                        }

                        // Check max events limit
                        if let Some(max) = max_events {
                            if stats.events_emitted >= max {
                                info!(events = stats.events_emitted, "Reached max events limit");
                                break;
                            }
                        }
                    }
                    Ok(None) => {
                        consecutive_bus_errors = 0;
                    }
                    Err(e) if e.is_bus_error() => {
                        consecutive_bus_errors += 1;
                        stats.gesture_stats.record_bus_error();
                        observability::record_bus_error(consecutive_bus_errors as u64);

                        warn!(
                            error = %e,
                            consecutive = consecutive_bus_errors,
                            "Bus error during poll"
                        );

                        if consecutive_bus_errors >= MAX_CONSECUTIVE_BUS_ERRORS {
                            error!(
                                consecutive = consecutive_bus_errors,
                                "Bus unresponsive, aborting pipeline"
                            );
                            break;
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Unrecoverable pipeline error");
                        break;
                    }
                }
            }

            stats
        };

        // Run with optional timeout
        let stats = if let Some(timeout) = self.config.timeout {
            match tokio::time::timeout(timeout, pipeline_task).await {
                Ok(stats) => stats,
                Err(_) => {
                    warn!(timeout_secs = timeout.as_secs(), "Pipeline timed out");
                    PipelineStats::default()
                }
            }
        } else {
            pipeline_task.await
        };

        // Shutdown: the event sender is gone, wait for the dispatcher to
        // drain and flush.
        info!("Shutting down pipeline...");
        let _ = tokio::time::timeout(Duration::from_secs(5), dispatcher_handle).await;

        let mut final_stats = stats;
        final_stats.duration = start_time.elapsed();

        info!(
            duration_secs = final_stats.duration.as_secs_f64(),
            events = final_stats.events_emitted,
            "Pipeline shutdown complete"
        );

        Ok(final_stats)
    }
}
