//! Register definitions for the PAJ7620 sensor
//!
//! The register file is split into two banks behind a shared bank-select
//! register; all gesture-relevant registers live in bank 0.

/// Fixed 7-bit I2C address
pub const I2C_ADDRESS: u8 = 0x73;

/// Part id reported by registers 0x00/0x01 (low byte first)
pub const PART_ID: u16 = 0x7620;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Part id low byte
    PartIdLow = 0x00,
    /// Part id high byte
    PartIdHigh = 0x01,
    /// Gesture interrupt enable, group 0
    IntEnable0 = 0x41,
    /// Gesture interrupt enable, group 1
    IntEnable1 = 0x42,
    /// Primary gesture status (Right/Left/Up/Down/Forward/Backward/rotations)
    GestureStatus = 0x43,
    /// Secondary gesture status (wave flag in bit 0)
    WaveStatus = 0x44,
    /// Bank select, shared across both banks
    BankSelect = 0xEF,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}

/// Register bank
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bank {
    #[default]
    Bank0 = 0x00,
    Bank1 = 0x01,
}

/// Gesture-mode bring-up table, applied once at init.
///
/// Vendor bring-up values: sensitivity/idle-time tuning in bank 0, gain and
/// clock trim in bank 1, then interrupt enables for all nine gestures. Bank
/// switches are encoded inline as writes to the bank-select register.
pub const GESTURE_MODE_INIT: &[(u8, u8)] = &[
    (0xEF, 0x00), // bank 0
    (0x37, 0x07),
    (0x38, 0x17),
    (0x39, 0x06),
    (0x41, 0x00), // interrupts masked during bring-up
    (0x42, 0x00),
    (0x46, 0x2D),
    (0x47, 0x0F),
    (0x48, 0x3C),
    (0x49, 0x00),
    (0x4A, 0x1E),
    (0x4C, 0x20),
    (0x51, 0x10),
    (0x5E, 0x10),
    (0x60, 0x27),
    (0x80, 0x42),
    (0x81, 0x44),
    (0x82, 0x04),
    (0x8B, 0x01),
    (0x90, 0x06),
    (0x95, 0x0A),
    (0x96, 0x0C),
    (0x97, 0x05),
    (0x9A, 0x14),
    (0x9C, 0x3F),
    (0xA5, 0x19),
    (0xCC, 0x19),
    (0xCD, 0x0B),
    (0xCE, 0x13),
    (0xCF, 0x64),
    (0xD0, 0x21),
    (0xEF, 0x01), // bank 1
    (0x02, 0x0F),
    (0x03, 0x10),
    (0x04, 0x02),
    (0x25, 0x01),
    (0x27, 0x39),
    (0x28, 0x7F),
    (0x29, 0x08),
    (0x3E, 0xFF),
    (0x5E, 0x3D),
    (0x65, 0x96),
    (0x67, 0x97),
    (0x69, 0xCD),
    (0x6A, 0x01),
    (0x6D, 0x2C),
    (0x6E, 0x01),
    (0x72, 0x01),
    (0x73, 0x35),
    (0x77, 0x01),
    (0xEF, 0x00), // back to bank 0
    (0x41, 0xFF), // enable all gesture interrupts
    (0x42, 0x01),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_table_ends_in_bank0_with_interrupts_enabled() {
        let last_bank = GESTURE_MODE_INIT
            .iter()
            .rev()
            .find(|(reg, _)| *reg == Register::BankSelect as u8)
            .map(|(_, value)| *value);
        assert_eq!(last_bank, Some(Bank::Bank0 as u8));

        let int0 = GESTURE_MODE_INIT
            .iter()
            .rev()
            .find(|(reg, _)| *reg == Register::IntEnable0 as u8)
            .map(|(_, value)| *value);
        assert_eq!(int0, Some(0xFF));
    }
}
