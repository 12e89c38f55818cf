//! Mock Pipeline Demo
//!
//! Demonstrates the full gesture pipeline over the scripted mock bus.
//! This demo runs without sensor hardware.
//!
//! Run with: cargo run --bin mock_pipeline --no-default-features

use contracts::{EventRecord, ResolverConfig, SinkConfig, SinkType};
use dispatcher::create_dispatcher;
use paj7620::{MockBus, Paj7620};
use resolver::GestureResolver;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Mock Pipeline Demo");

    // ==== Stage 1: Use resolver defaults or load from file ====
    let resolver_config = if let Some(path) = std::env::args().nth(1) {
        tracing::info!(path = %path, "Loading pipeline config");
        let blueprint = config_loader::ConfigLoader::load_from_path(std::path::Path::new(&path))?;
        blueprint.to_resolver_config()
    } else {
        // A short settle window keeps the demo snappy
        ResolverConfig::with_settle_ms(100)
    };

    // ==== Stage 2: Bring up the driver over the scripted bus ====
    tracing::info!("Creating mock bus with the nine-gesture demo script...");

    let mut driver = Paj7620::new(MockBus::demo());
    driver.init()?;

    tracing::info!("Sensor initialized, recognizing 9 gestures");

    let mut resolver = GestureResolver::new(driver, resolver_config);

    // ==== Stage 3: Dispatcher with a console sink ====
    let sink_configs = vec![SinkConfig {
        name: "console".to_string(),
        sink_type: SinkType::Log,
        queue_capacity: 16,
        params: Default::default(),
    }];

    let (event_tx, event_rx) = mpsc::channel::<EventRecord>(16);
    let dispatcher = create_dispatcher(sink_configs, event_rx)?;
    let dispatcher_handle = dispatcher.spawn();

    // ==== Stage 4: Poll through two full demo cycles ====
    let start = std::time::Instant::now();
    let mut seq = 0u64;

    while seq < 18 {
        if let Some(event) = resolver.poll_once().await? {
            let record = EventRecord::new(seq, start.elapsed().as_secs_f64(), event);
            tracing::info!(seq, gesture = %event, "Gesture resolved");
            event_tx.send(record).await?;
            seq += 1;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    // ==== Stage 5: Shutdown ====
    drop(event_tx);
    dispatcher_handle.await?;

    tracing::info!("Mock Pipeline Demo complete");
    Ok(())
}
