//! Device record and classification types
//!
//! A [`DeviceRecord`] is the typed form of one line of enumeration
//! output. Records are replaced wholesale on every refresh cycle; there
//! is no identity linking a record on one cycle to a record on the next.

use serde::{Deserialize, Serialize};

/// Sentinel for a bus or address token that could not be recovered.
pub const UNKNOWN_TOKEN: &str = "???";

/// Sentinel for a vendor:product pair that could not be recovered.
pub const UNKNOWN_ID: &str = "????:????";

/// Description used when a line matched but carried no trailing text.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Indicator words that mark a device as being in a firmware-update
/// (bootloader/DFU) state. Matched case-insensitively against the
/// description text.
const FIRMWARE_INDICATORS: &[&str] = &["dfu", "download", "boot"];

/// Device kind, derived once at parse time from the description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Ordinary operating device
    Normal,
    /// Device exposing a firmware-update / bootloader interface
    FirmwareMode,
}

impl DeviceKind {
    /// Classify a description. Total: any text yields a kind.
    pub fn classify(description: &str) -> Self {
        let lower = description.to_ascii_lowercase();
        if FIRMWARE_INDICATORS.iter().any(|w| lower.contains(w)) {
            DeviceKind::FirmwareMode
        } else {
            DeviceKind::Normal
        }
    }

    pub fn is_firmware_mode(self) -> bool {
        self == DeviceKind::FirmwareMode
    }
}

/// One parsed enumeration line.
///
/// `bus` and `address` are opaque tokens: the enumeration command is not
/// guaranteed to emit numbers there, so nothing downstream parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Bus token as printed by the enumeration command
    pub bus: String,
    /// Device address token on the bus
    pub address: String,
    /// Normalized lowercase `vvvv:pppp`, or [`UNKNOWN_ID`]
    pub id: String,
    /// Trailing descriptive text, original case preserved
    pub description: String,
    /// Kind tag derived from `description`
    pub kind: DeviceKind,
}

impl DeviceRecord {
    /// Build a record from recovered fields, deriving the kind.
    pub fn new(bus: String, address: String, id: String, description: String) -> Self {
        let kind = DeviceKind::classify(&description);
        Self {
            bus,
            address,
            id,
            description,
            kind,
        }
    }

    /// Best-effort record for a line that did not fit the structural
    /// pattern. The whole line survives as the description.
    pub fn fallback(line: &str) -> Self {
        Self::new(
            UNKNOWN_TOKEN.to_string(),
            UNKNOWN_TOKEN.to_string(),
            UNKNOWN_ID.to_string(),
            line.to_string(),
        )
    }
}
