//! Enumeration-output parser
//!
//! Turns the raw multi-line text of the enumeration command into
//! [`DeviceRecord`]s, one per non-blank line. A line that does not fit
//! the structural pattern still produces a record: the whole line is
//! kept as the description so no information is dropped.
//!
//! The expected pattern per line is
//!
//! ```text
//! Bus 001 Device 002: ID 0483:df11 STM Device in DFU Mode
//! ```
//!
//! where the keyword tokens (`Bus`, `Device`, `ID`) match
//! case-insensitively and the description keeps its original case.

use crate::device::{DeviceRecord, UNKNOWN_DESCRIPTION, UNKNOWN_ID};

/// Separator between the bus/address prefix and the id/description
/// suffix, matched on an ascii-lowercased shadow of the line.
const ID_SEPARATOR: &str = ": id ";

/// Parse a full enumeration snapshot.
///
/// Blank lines (after trimming) are dropped; every other line yields
/// exactly one record, in input order.
pub fn parse_listing(raw: &str) -> Vec<DeviceRecord> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Parse a single non-blank line, falling back to a best-effort record
/// when the structural pattern does not match.
fn parse_line(line: &str) -> DeviceRecord {
    try_parse_structured(line).unwrap_or_else(|| DeviceRecord::fallback(line))
}

fn try_parse_structured(line: &str) -> Option<DeviceRecord> {
    // An ascii-lowercase shadow has identical byte offsets, so the
    // separator position found here indexes the original line too.
    let lower = line.to_ascii_lowercase();
    let sep = lower.find(ID_SEPARATOR)?;
    let prefix = &line[..sep];
    let suffix = &line[sep + ID_SEPARATOR.len()..];

    // Prefix: `Bus <token> Device <token>`
    let mut tokens = prefix.split_whitespace();
    if !tokens.next()?.eq_ignore_ascii_case("bus") {
        return None;
    }
    let bus = tokens.next()?.to_string();
    if !tokens.next()?.eq_ignore_ascii_case("device") {
        return None;
    }
    let address = tokens.next()?.to_string();
    if tokens.next().is_some() {
        return None;
    }

    // Suffix: `<vvvv:pppp>` with optional trailing description
    let suffix = suffix.trim_start();
    let (id_token, description) = match suffix.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim()),
        None => (suffix, ""),
    };
    if id_token.is_empty() {
        return None;
    }

    let description = if description.is_empty() {
        UNKNOWN_DESCRIPTION.to_string()
    } else {
        description.to_string()
    };

    Some(DeviceRecord::new(
        bus,
        address,
        normalize_id(id_token),
        description,
    ))
}

/// Normalize a `vendor:product` token to lowercase hex, or substitute
/// the sentinel when the token is not a hex pair.
fn normalize_id(token: &str) -> String {
    if let Some((vendor, product)) = token.split_once(':') {
        let is_hex =
            |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit());
        if is_hex(vendor) && is_hex(product) {
            return token.to_ascii_lowercase();
        }
    }
    UNKNOWN_ID.to_string()
}
