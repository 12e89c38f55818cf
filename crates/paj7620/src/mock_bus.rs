//! Mock bus implementation
//!
//! Implements `GestureBus` over an in-memory register file with scripted
//! gesture reads. Used for testing and development without sensor hardware.

use std::collections::{HashMap, VecDeque};

use contracts::{GestureBus, PipelineError};
use tracing::trace;

use crate::registers::{Register, PART_ID};

/// Mock bus configuration (failure injection)
#[derive(Debug, Default, Clone)]
pub struct MockBusConfig {
    /// Registers whose reads always fail
    pub fail_reads: Vec<u8>,
    /// Registers whose next read fails, once
    pub fail_reads_once: Vec<u8>,
    /// Registers whose writes always fail
    pub fail_writes: Vec<u8>,
    /// Replay the gesture script from the start once drained
    pub loop_script: bool,
}

/// Mock bus
///
/// Reads of the two status registers pop scripted bytes (empty script reads
/// as zero, like a sensor with no gesture buffered); every other register is
/// backed by a plain register map primed with the real part id so `init`
/// succeeds out of the box.
pub struct MockBus {
    config: MockBusConfig,
    registers: HashMap<u8, u8>,
    gesture_script: VecDeque<u8>,
    wave_script: VecDeque<u8>,
    script_source: Vec<u8>,
    wave_source: Vec<u8>,
}

impl MockBus {
    /// Create a mock bus with an empty script
    pub fn new() -> Self {
        Self::with_config(MockBusConfig::default())
    }

    /// Create a mock bus with failure injection
    pub fn with_config(config: MockBusConfig) -> Self {
        let mut registers = HashMap::new();
        registers.insert(Register::PartIdLow.into(), (PART_ID & 0xFF) as u8);
        registers.insert(Register::PartIdHigh.into(), (PART_ID >> 8) as u8);

        Self {
            config,
            registers,
            gesture_script: VecDeque::new(),
            wave_script: VecDeque::new(),
            script_source: Vec::new(),
            wave_source: Vec::new(),
        }
    }

    /// A looping script exercising all nine gestures, for runs without
    /// sensor hardware
    ///
    /// Each loop emits: Right, Forward (compound), Up, Backward (compound),
    /// Forward, Backward, Clockwise, Anti-clockwise, Wave. Zero entries feed
    /// the lookahead reads of the plain directions.
    pub fn demo() -> Self {
        use contracts::GestureFlags as F;

        let config = MockBusConfig {
            loop_script: true,
            ..Default::default()
        };
        let mut bus = Self::with_config(config);
        bus.script([
            F::RIGHT.bits(),
            0x00, // lookahead: stays Right
            F::LEFT.bits(),
            F::FORWARD.bits(), // lookahead: superseded
            F::UP.bits(),
            0x00, // lookahead: stays Up
            F::DOWN.bits(),
            F::BACKWARD.bits(), // lookahead: superseded
            F::FORWARD.bits(),
            F::BACKWARD.bits(),
            F::CLOCKWISE.bits(),
            F::ANTI_CLOCKWISE.bits(),
            0x00, // empty primary: wave shows up in the secondary register
        ]);
        bus.push_wave(F::WAVE.bits());
        bus
    }

    /// Queue one primary status byte
    pub fn push_gesture(&mut self, status: u8) {
        self.gesture_script.push_back(status);
        self.script_source.push(status);
    }

    /// Queue a sequence of primary status bytes
    pub fn script(&mut self, statuses: impl IntoIterator<Item = u8>) {
        for status in statuses {
            self.push_gesture(status);
        }
    }

    /// Queue one secondary status byte
    pub fn push_wave(&mut self, status: u8) {
        self.wave_script.push_back(status);
        self.wave_source.push(status);
    }

    /// Overwrite a backing register (e.g. to break the part id)
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers.insert(register, value);
    }

    /// Read back a register written by the driver
    pub fn register(&self, register: u8) -> u8 {
        self.registers.get(&register).copied().unwrap_or(0)
    }

    /// Remaining scripted primary reads
    pub fn remaining(&self) -> usize {
        self.gesture_script.len()
    }

    fn next_gesture(&mut self) -> u8 {
        if self.gesture_script.is_empty() && self.config.loop_script {
            self.gesture_script.extend(self.script_source.iter().copied());
        }
        self.gesture_script.pop_front().unwrap_or(0)
    }

    fn next_wave(&mut self) -> u8 {
        if self.wave_script.is_empty() && self.config.loop_script {
            self.wave_script.extend(self.wave_source.iter().copied());
        }
        self.wave_script.pop_front().unwrap_or(0)
    }

    fn check_read_failure(&mut self, register: u8) -> Result<(), PipelineError> {
        if self.config.fail_reads.contains(&register) {
            return Err(PipelineError::bus(register, "injected read failure"));
        }
        if let Some(idx) = self
            .config
            .fail_reads_once
            .iter()
            .position(|&r| r == register)
        {
            self.config.fail_reads_once.remove(idx);
            return Err(PipelineError::bus(register, "injected one-shot read failure"));
        }
        Ok(())
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureBus for MockBus {
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), PipelineError> {
        self.check_read_failure(register)?;

        for (offset, slot) in buf.iter_mut().enumerate() {
            let reg = register.wrapping_add(offset as u8);
            *slot = if reg == Register::GestureStatus as u8 {
                self.next_gesture()
            } else if reg == Register::WaveStatus as u8 {
                self.next_wave()
            } else {
                self.register(reg)
            };
        }

        trace!(register = format!("{register:#04x}"), bytes = buf.len(), "mock read");
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), PipelineError> {
        if self.config.fail_writes.contains(&register) {
            return Err(PipelineError::bus(register, "injected write failure"));
        }
        self.registers.insert(register, value);
        trace!(
            register = format!("{register:#04x}"),
            value = format!("{value:#04x}"),
            "mock write"
        );
        Ok(())
    }
}
