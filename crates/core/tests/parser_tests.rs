//! Parser and classifier integration tests
//!
//! Covers the line-to-record invariants: one record per non-blank line,
//! lossless fallback for unstructured lines, id normalization, and
//! kind classification.

use usbtop_core::device::{DeviceKind, UNKNOWN_ID, UNKNOWN_TOKEN};
use usbtop_core::parse_listing;
use usbtop_core::test_utils::{SAMPLE_LISTING, SAMPLE_LISTING_DEVICES};

// ============================================================================
// Record-per-line invariants
// ============================================================================

#[test]
fn test_one_record_per_non_blank_line() {
    let records = parse_listing(SAMPLE_LISTING);
    assert_eq!(records.len(), SAMPLE_LISTING_DEVICES);

    let non_blank = SAMPLE_LISTING.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(records.len(), non_blank);
}

#[test]
fn test_blank_lines_produce_no_records() {
    assert!(parse_listing("").is_empty());
    assert!(parse_listing("\n\n  \n\t\n").is_empty());
}

#[test]
fn test_order_matches_input_order() {
    let records = parse_listing(SAMPLE_LISTING);
    let buses: Vec<&str> = records.iter().map(|r| r.bus.as_str()).collect();
    assert_eq!(buses, ["001", "001", "002", "003", "003"]);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse_listing(SAMPLE_LISTING), parse_listing(SAMPLE_LISTING));
}

// ============================================================================
// Fallback records
// ============================================================================

#[test]
fn test_unstructured_line_yields_lossless_fallback() {
    let records = parse_listing("garbage text with no structure");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].bus, UNKNOWN_TOKEN);
    assert_eq!(records[0].address, UNKNOWN_TOKEN);
    assert_eq!(records[0].id, UNKNOWN_ID);
    assert_eq!(records[0].description, "garbage text with no structure");
}

#[test]
fn test_fallback_interleaves_with_structured_lines() {
    let mixed = "Bus 001 Device 001: ID 1d6b:0002 root hub\n\
                 !!! transient kernel splat !!!\n\
                 Bus 001 Device 002: ID 0483:df11 DFU loader\n";
    let records = parse_listing(mixed);
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].description, "!!! transient kernel splat !!!");
    assert_eq!(records[1].id, UNKNOWN_ID);
    assert_eq!(records[2].id, "0483:df11");
}

#[test]
fn test_fallback_description_still_classified() {
    let records = parse_listing("something about a dfu gadget");
    assert_eq!(records[0].kind, DeviceKind::FirmwareMode);
}

#[test]
fn test_prefix_with_extra_tokens_falls_back() {
    let line = "Bus 001 Hub Device 002: ID 1d6b:0002 root hub";
    let records = parse_listing(line);
    assert_eq!(records[0].bus, UNKNOWN_TOKEN);
    assert_eq!(records[0].description, line);
}

// ============================================================================
// Id normalization
// ============================================================================

#[test]
fn test_id_normalized_to_lowercase() {
    let records = parse_listing("Bus 001 Device 002: ID 0483:DF11 Loader");
    assert_eq!(records[0].id, "0483:df11");
}

#[test]
fn test_non_hex_id_becomes_sentinel() {
    let records = parse_listing("Bus 001 Device 002: ID zzzz:0001 Widget");
    assert_eq!(records[0].id, UNKNOWN_ID);
    assert_eq!(records[0].description, "Widget");
}

#[test]
fn test_id_missing_colon_becomes_sentinel() {
    let records = parse_listing("Bus 001 Device 002: ID 0483df11 Widget");
    assert_eq!(records[0].id, UNKNOWN_ID);
}

// ============================================================================
// End-to-end: a DFU listing line
// ============================================================================

#[test]
fn test_dfu_line_parses_and_classifies() {
    let records = parse_listing("Bus 001 Device 002: ID 0483:df11 STM Device in DFU Mode");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.bus, "001");
    assert_eq!(record.address, "002");
    assert_eq!(record.id, "0483:df11");
    assert_eq!(record.description, "STM Device in DFU Mode");
    assert_eq!(record.kind, DeviceKind::FirmwareMode);
}

#[test]
fn test_classifier_matches_all_casings() {
    for desc in ["DFU", "dfu", "Dfu"] {
        assert_eq!(
            DeviceKind::classify(desc),
            DeviceKind::FirmwareMode,
            "{desc} should classify as firmware mode"
        );
    }
}
