//! Linux I2C bus
//!
//! `GestureBus` over /dev/i2c-* via the i2cdev crate. Only compiled with the
//! `linux-i2c` feature; the mock bus covers every other build.

use contracts::{GestureBus, PipelineError};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use tracing::info;

use crate::registers::I2C_ADDRESS;

/// Real sensor bus over a Linux I2C character device
pub struct LinuxI2cBus {
    device: LinuxI2CDevice,
    path: String,
}

impl LinuxI2cBus {
    /// Open the bus at `path` with the sensor's default address
    pub fn open(path: &str) -> Result<Self, PipelineError> {
        Self::open_at(path, I2C_ADDRESS)
    }

    /// Open the bus at `path` addressing `address`
    pub fn open_at(path: &str, address: u8) -> Result<Self, PipelineError> {
        let device = LinuxI2CDevice::new(path, address as u16)
            .map_err(|e| PipelineError::bus_open(path, e.to_string()))?;

        info!(
            path = %path,
            address = format!("{address:#04x}"),
            "i2c bus opened"
        );

        Ok(Self {
            device,
            path: path.to_string(),
        })
    }

    /// Device path this bus was opened on
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl GestureBus for LinuxI2cBus {
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), PipelineError> {
        // Per-byte SMBus reads: status reads are one or two bytes and not
        // every adapter supports block transfers.
        for (offset, slot) in buf.iter_mut().enumerate() {
            let reg = register.wrapping_add(offset as u8);
            *slot = self
                .device
                .smbus_read_byte_data(reg)
                .map_err(|e| PipelineError::bus(reg, e.to_string()))?;
        }
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), PipelineError> {
        self.device
            .smbus_write_byte_data(register, value)
            .map_err(|e| PipelineError::bus(register, e.to_string()))
    }
}
