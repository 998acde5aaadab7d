//! Device-kind filter
//!
//! Pure selection over a parsed record list. With the filter off this is
//! the identity; with it on, only firmware-mode records survive. The
//! input is never reordered or mutated.

use crate::device::DeviceRecord;

/// Apply the firmware-only filter to a record list.
pub fn apply(records: &[DeviceRecord], firmware_only: bool) -> Vec<DeviceRecord> {
    records
        .iter()
        .filter(|record| !firmware_only || record.kind.is_firmware_mode())
        .cloned()
        .collect()
}
