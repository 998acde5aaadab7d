//! Shared fixtures for unit and integration tests

use crate::device::DeviceRecord;

/// A realistic enumeration snapshot: four ordinary devices, one device
/// in firmware-update mode, and interspersed blank lines.
pub const SAMPLE_LISTING: &str = "\
Bus 001 Device 001: ID 1d6b:0002 Linux Foundation 2.0 root hub

Bus 001 Device 004: ID 046d:c52b Logitech, Inc. Unifying Receiver
Bus 002 Device 001: ID 1d6b:0003 Linux Foundation 3.0 root hub
Bus 003 Device 002: ID 0483:df11 STMicroelectronics STM Device in DFU Mode

Bus 003 Device 005: ID 0bda:8153 Realtek Semiconductor Corp. RTL8153 Gigabit Ethernet Adapter
";

/// Record count for [`SAMPLE_LISTING`].
pub const SAMPLE_LISTING_DEVICES: usize = 5;

/// Firmware-mode record count for [`SAMPLE_LISTING`].
pub const SAMPLE_LISTING_FIRMWARE: usize = 1;

/// Build an ordinary record (address fixed, kind derived).
pub fn normal_record(bus: &str, id: &str, description: &str) -> DeviceRecord {
    let record = DeviceRecord::new(
        bus.to_string(),
        "001".to_string(),
        id.to_string(),
        description.to_string(),
    );
    debug_assert!(!record.kind.is_firmware_mode(), "description classifies as firmware mode");
    record
}

/// Build a firmware-mode record; the description must carry an
/// indicator word so the derived kind matches.
pub fn firmware_record(bus: &str, id: &str, description: &str) -> DeviceRecord {
    let record = DeviceRecord::new(
        bus.to_string(),
        "001".to_string(),
        id.to_string(),
        description.to_string(),
    );
    debug_assert!(record.kind.is_firmware_mode(), "description lacks a firmware indicator");
    record
}
