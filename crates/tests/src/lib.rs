//! # Integration Tests
//!
//! Cross-crate and end-to-end tests.
//!
//! Covers:
//! - Contract snapshot checks
//! - Mock e2e runs (no sensor hardware)
//! - Config-to-pipeline wiring

#[cfg(test)]
mod contract_tests {
    use contracts::{GestureEvent, GestureFlags};

    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
    }

    #[test]
    fn test_event_names_are_stable() {
        // Sink output is a public surface; these strings are load-bearing.
        let expected = [
            "Right",
            "Left",
            "Up",
            "Down",
            "Forward",
            "Backward",
            "Clockwise",
            "Anti-clockwise",
            "Wave",
        ];
        for (event, name) in GestureEvent::ALL.iter().zip(expected) {
            assert_eq!(event.name(), name);
        }
    }

    #[test]
    fn test_flag_layout_matches_datasheet() {
        assert_eq!(GestureFlags::RIGHT.bits(), 0x01);
        assert_eq!(GestureFlags::ANTI_CLOCKWISE.bits(), 0x80);
        assert_eq!(GestureFlags::WAVE.bits(), 0x01);
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::collections::HashMap;

    use contracts::{EventRecord, GestureEvent, GestureFlags, ResolverConfig, SinkConfig, SinkType};
    use dispatcher::create_dispatcher;
    use paj7620::{MockBus, Paj7620};
    use resolver::GestureResolver;
    use tokio::sync::mpsc;

    /// End-to-end: MockBus -> Paj7620 -> GestureResolver -> Dispatcher
    ///
    /// Verifies the full data flow:
    /// 1. MockBus serves a scripted register file
    /// 2. Paj7620 initializes and reads status bytes
    /// 3. GestureResolver classifies, with lookahead disambiguation
    /// 4. Dispatcher fans events out to sinks
    #[tokio::test(start_paused = true)]
    async fn test_e2e_mock_pipeline() {
        // Setup: scripted bus, one of each resolution class
        let mut bus = MockBus::new();
        bus.script([
            GestureFlags::RIGHT.bits(),
            0x00, // lookahead: stays Right
            GestureFlags::LEFT.bits(),
            GestureFlags::FORWARD.bits(), // lookahead: superseded
            GestureFlags::CLOCKWISE.bits(),
            0x00, // empty primary: wave check
        ]);
        bus.push_wave(GestureFlags::WAVE.bits());

        let mut driver = Paj7620::new(bus);
        driver.init().expect("init against mock bus");

        let mut resolver = GestureResolver::new(driver, ResolverConfig::default());

        // Dispatcher with a file sink so output is observable
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink_configs = vec![SinkConfig {
            name: "events".to_string(),
            sink_type: SinkType::File,
            queue_capacity: 16,
            params: HashMap::from([("path".to_string(), path.display().to_string())]),
        }];

        let (event_tx, event_rx) = mpsc::channel::<EventRecord>(16);
        let dispatcher = create_dispatcher(sink_configs, event_rx).unwrap();
        let dispatcher_handle = dispatcher.spawn();

        // Drive the poll loop until the script runs dry
        let mut emitted = Vec::new();
        let mut seq = 0u64;
        for _ in 0..4 {
            if let Some(event) = resolver.poll_once().await.unwrap() {
                emitted.push(event);
                event_tx
                    .send(EventRecord::new(seq, seq as f64 * 0.1, event))
                    .await
                    .unwrap();
                seq += 1;
            }
        }

        assert_eq!(
            emitted,
            vec![
                GestureEvent::Right,
                GestureEvent::Forward,
                GestureEvent::Clockwise,
                GestureEvent::Wave,
            ]
        );

        // Close the channel and wait for the sink to flush
        drop(event_tx);
        dispatcher_handle.await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let gestures: Vec<String> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["gesture"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(gestures, vec!["Right", "Forward", "Clockwise", "Wave"]);
    }

    /// The demo script loops forever and always resolves the same cycle
    #[tokio::test(start_paused = true)]
    async fn test_demo_script_cycles_all_gestures() {
        let mut driver = Paj7620::new(MockBus::demo());
        driver.init().unwrap();
        let mut resolver = GestureResolver::new(driver, ResolverConfig::default());

        let expected_cycle = [
            GestureEvent::Right,
            GestureEvent::Forward,
            GestureEvent::Up,
            GestureEvent::Backward,
            GestureEvent::Forward,
            GestureEvent::Backward,
            GestureEvent::Clockwise,
            GestureEvent::AntiClockwise,
            GestureEvent::Wave,
        ];

        for round in 0..2 {
            for expected in expected_cycle {
                let event = resolver.poll_once().await.unwrap();
                assert_eq!(event, Some(expected), "round {round}");
            }
        }
    }

    /// Config loaded from TOML drives the same resolver settings end to end
    #[tokio::test(start_paused = true)]
    async fn test_config_to_resolver_wiring() {
        let content = r#"
[sensor]
id = "paj7620"

[resolver]
settle_ms = 200

[[sinks]]
name = "console"
sink_type = "log"
"#;
        let blueprint =
            config_loader::ConfigLoader::load_from_str(content, config_loader::ConfigFormat::Toml)
                .unwrap();

        let mut bus = MockBus::new();
        bus.script([GestureFlags::DOWN.bits(), GestureFlags::FORWARD.bits()]);

        let driver = Paj7620::new(bus).with_retry(blueprint.sensor.retry_on_bus_error);
        let mut resolver = GestureResolver::new(driver, blueprint.to_resolver_config());

        let start = tokio::time::Instant::now();
        let event = resolver.poll_once().await.unwrap();
        assert_eq!(event, Some(GestureEvent::Forward));
        assert_eq!(start.elapsed().as_millis(), 200);
    }

    /// A dead bus propagates as an error through the whole read path
    #[tokio::test(start_paused = true)]
    async fn test_e2e_bus_error_propagation() {
        let config = paj7620::MockBusConfig {
            fail_reads: vec![0x43],
            ..Default::default()
        };
        let driver = Paj7620::new(MockBus::with_config(config));
        let mut resolver = GestureResolver::new(driver, ResolverConfig::default());

        let result = resolver.poll_once().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().is_bus_error());
    }
}
