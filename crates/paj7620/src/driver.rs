//! PAJ7620 driver
//!
//! Owns a [`GestureBus`] and exposes the two status reads the resolver
//! consumes. A failed transaction surfaces as [`PipelineError::Bus`]; it is
//! never reported as an empty flag set.

use contracts::{GestureBus, GestureFlags, GestureReader, PipelineError};
use tracing::{debug, instrument, warn};

use crate::registers::{Bank, Register, GESTURE_MODE_INIT, PART_ID};

/// PAJ7620 gesture sensor driver
pub struct Paj7620<B> {
    bus: B,
    /// One-shot retry of a failed transaction (config-gated quality knob)
    retry_on_bus_error: bool,
}

impl<B: GestureBus> Paj7620<B> {
    /// Create a driver over an initialized bus handle
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            retry_on_bus_error: false,
        }
    }

    /// Enable one-shot retry of failed bus transactions
    pub fn with_retry(mut self, retry_on_bus_error: bool) -> Self {
        self.retry_on_bus_error = retry_on_bus_error;
        self
    }

    /// Give the bus handle back (for teardown)
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Wake the sensor and bring it into gesture mode
    ///
    /// Wake-up read, bank 0, part-id check, vendor bring-up table. Any
    /// failure aborts init and is surfaced to the caller.
    #[instrument(name = "paj7620_init", skip(self))]
    pub fn init(&mut self) -> Result<(), PipelineError> {
        // First transaction only wakes the sensor from suspend; its result
        // carries no data and a NACK here is expected.
        let mut scratch = [0u8; 1];
        let _ = self.bus.read_register(Register::PartIdLow.into(), &mut scratch);

        self.select_bank(Bank::Bank0)?;
        self.verify_part_id()?;

        for &(register, value) in GESTURE_MODE_INIT {
            self.bus.write_register(register, value)?;
        }

        debug!("gesture mode configured");
        Ok(())
    }

    /// Read the primary gesture status byte (bank 0, register 0x43)
    pub fn read_gesture(&mut self) -> Result<GestureFlags, PipelineError> {
        let mut buf = [0u8; 1];
        self.read(Register::GestureStatus, &mut buf)?;
        Ok(GestureFlags::from(buf[0]))
    }

    /// Read the secondary status byte (bank 0, register 0x44), wave = bit 0
    pub fn read_wave(&mut self) -> Result<bool, PipelineError> {
        let mut buf = [0u8; 1];
        self.read(Register::WaveStatus, &mut buf)?;
        Ok(GestureFlags::from(buf[0]).contains(GestureFlags::WAVE))
    }

    fn select_bank(&mut self, bank: Bank) -> Result<(), PipelineError> {
        self.bus.write_register(Register::BankSelect.into(), bank as u8)
    }

    fn verify_part_id(&mut self) -> Result<(), PipelineError> {
        let mut id = [0u8; 2];
        self.read(Register::PartIdLow, &mut id)?;
        let found = u16::from_be_bytes([id[1], id[0]]);
        if found != PART_ID {
            return Err(PipelineError::UnexpectedDevice {
                expected: PART_ID,
                found,
            });
        }
        debug!(part_id = format!("{found:#06x}"), "part id verified");
        Ok(())
    }

    fn read(&mut self, register: Register, buf: &mut [u8]) -> Result<(), PipelineError> {
        match self.bus.read_register(register.into(), buf) {
            Err(first) if self.retry_on_bus_error && first.is_bus_error() => {
                warn!(register = ?register, error = %first, "bus read failed, retrying once");
                self.bus.read_register(register.into(), buf)
            }
            other => other,
        }
    }
}

impl<B: GestureBus> GestureReader for Paj7620<B> {
    fn read_gesture(&mut self) -> Result<GestureFlags, PipelineError> {
        Paj7620::read_gesture(self)
    }

    fn read_wave(&mut self) -> Result<bool, PipelineError> {
        Paj7620::read_wave(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_bus::{MockBus, MockBusConfig};

    #[test]
    fn test_init_applies_bring_up_table() {
        let mut driver = Paj7620::new(MockBus::new());
        driver.init().unwrap();

        let bus = driver.into_bus();
        // Last bank-select write must leave the sensor in bank 0 with the
        // gesture interrupts enabled.
        assert_eq!(bus.register(Register::BankSelect.into()), Bank::Bank0 as u8);
        assert_eq!(bus.register(Register::IntEnable0.into()), 0xFF);
        assert_eq!(bus.register(Register::IntEnable1.into()), 0x01);
    }

    #[test]
    fn test_init_rejects_wrong_part_id() {
        let mut bus = MockBus::new();
        bus.set_register(Register::PartIdLow.into(), 0x00);
        bus.set_register(Register::PartIdHigh.into(), 0x00);

        let mut driver = Paj7620::new(bus);
        let err = driver.init().unwrap_err();
        assert!(matches!(err, PipelineError::UnexpectedDevice { .. }));
    }

    #[test]
    fn test_read_gesture_returns_flags() {
        let mut bus = MockBus::new();
        bus.push_gesture(GestureFlags::LEFT.bits());

        let mut driver = Paj7620::new(bus);
        assert_eq!(driver.read_gesture().unwrap(), GestureFlags::LEFT);
        // Script drained: subsequent reads report no flags
        assert!(driver.read_gesture().unwrap().is_empty());
    }

    #[test]
    fn test_bus_error_is_not_no_gesture() {
        let config = MockBusConfig {
            fail_reads: vec![Register::GestureStatus.into()],
            ..Default::default()
        };
        let mut driver = Paj7620::new(MockBus::with_config(config));
        let err = driver.read_gesture().unwrap_err();
        assert!(err.is_bus_error());
    }

    #[test]
    fn test_one_shot_retry_recovers_single_failure() {
        let config = MockBusConfig {
            fail_reads_once: vec![Register::GestureStatus.into()],
            ..Default::default()
        };
        let mut bus = MockBus::with_config(config);
        bus.push_gesture(GestureFlags::UP.bits());

        let mut driver = Paj7620::new(bus).with_retry(true);
        assert_eq!(driver.read_gesture().unwrap(), GestureFlags::UP);
    }

    #[test]
    fn test_retry_disabled_propagates_first_failure() {
        let config = MockBusConfig {
            fail_reads_once: vec![Register::GestureStatus.into()],
            ..Default::default()
        };
        let mut driver = Paj7620::new(MockBus::with_config(config));
        assert!(driver.read_gesture().is_err());
    }
}
