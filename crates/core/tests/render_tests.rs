//! Filter and render-state integration tests
//!
//! The builder must be idempotent and obey the truncation law so its
//! output can be compared byte-for-byte across cycles.

use usbtop_core::filter;
use usbtop_core::render::{self, ELLIPSIS, ID_WIDTH, NAME_MIN_WIDTH, RowEmphasis};
use usbtop_core::test_utils::{firmware_record, normal_record};
use usbtop_core::{DeviceRecord, parse_listing};

fn sample_records() -> Vec<DeviceRecord> {
    vec![
        normal_record("001", "1d6b:0002", "Linux Foundation 2.0 root hub"),
        firmware_record("001", "0483:df11", "STM Device in DFU Mode"),
        normal_record("002", "046d:c52b", "Logitech, Inc. Unifying Receiver"),
    ]
}

// ============================================================================
// Filter laws
// ============================================================================

#[test]
fn test_filter_off_identity() {
    let records = sample_records();
    assert_eq!(filter::apply(&records, false), records);
}

#[test]
fn test_filter_on_subset_in_original_order() {
    let records = sample_records();
    let filtered = filter::apply(&records, true);
    assert!(filtered.iter().all(|r| r.kind.is_firmware_mode()));

    // relative order: positions in the original list are increasing
    let positions: Vec<usize> = filtered
        .iter()
        .map(|f| records.iter().position(|r| r == f).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_filter_composes_with_parser() {
    // With a non-DFU device present, the filtered set contains only
    // the DFU record.
    let listing = "Bus 001 Device 002: ID 0483:df11 STM Device in DFU Mode\n\
                   Bus 001 Device 003: ID 046d:c52b Logitech Receiver\n";
    let records = parse_listing(listing);
    assert_eq!(records.len(), 2);

    let filtered = filter::apply(&records, true);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "0483:df11");

    let unfiltered = filter::apply(&records, false);
    assert_eq!(unfiltered.len(), 2);
}

// ============================================================================
// Builder determinism
// ============================================================================

#[test]
fn test_build_is_idempotent() {
    let records = sample_records();
    let a = render::build(&records, records.len(), 80);
    let b = render::build(&records, records.len(), 80);
    assert_eq!(a, b);
}

#[test]
fn test_summary_counts() {
    let records = sample_records();
    let filtered = filter::apply(&records, true);
    let state = render::build(&filtered, records.len(), 80);
    assert_eq!(state.summary, "1 / 3 devices");
}

// ============================================================================
// Truncation law
// ============================================================================

#[test]
fn test_long_description_cut_to_width_with_ellipsis() {
    let long = "An unreasonably long device description that cannot possibly fit in the name column of a narrow terminal";
    let records = vec![normal_record("001", "1234:abcd", long)];
    let state = render::build(&records, 1, 40);

    let name = &state.rows[0].name;
    assert_eq!(name.chars().count(), state.name_width);
    assert!(name.ends_with(ELLIPSIS));
}

#[test]
fn test_short_description_right_padded() {
    let records = vec![normal_record("001", "1234:abcd", "Mouse")];
    let state = render::build(&records, 1, 80);

    let name = &state.rows[0].name;
    assert_eq!(name.chars().count(), state.name_width);
    assert!(name.starts_with("Mouse"));
    assert!(name[5..].chars().all(|c| c == ' '));
}

#[test]
fn test_name_column_never_below_floor() {
    let records = vec![normal_record("001", "1234:abcd", "Mouse")];
    let state = render::build(&records, 1, 10);
    assert_eq!(state.name_width, NAME_MIN_WIDTH);
}

#[test]
fn test_id_column_fits_sentinel() {
    assert_eq!("????:????".len(), ID_WIDTH);
}

// ============================================================================
// Emphasis and placeholder
// ============================================================================

#[test]
fn test_firmware_rows_emphasized() {
    let records = sample_records();
    let state = render::build(&records, records.len(), 80);
    assert_eq!(state.rows[0].emphasis, RowEmphasis::Dimmed);
    assert_eq!(state.rows[1].emphasis, RowEmphasis::Emphasized);
    assert_eq!(state.rows[2].emphasis, RowEmphasis::Dimmed);
}

#[test]
fn test_empty_filtered_set_yields_placeholder_row() {
    let state = render::build(&[], 3, 80);
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].emphasis, RowEmphasis::Dimmed);
    assert!(state.rows[0].name.contains("filter"));
    assert_eq!(state.summary, "0 / 3 devices");
}

#[test]
fn test_empty_bus_yields_distinct_placeholder() {
    let state = render::build(&[], 0, 80);
    assert_eq!(state.rows.len(), 1);
    assert!(state.rows[0].name.contains("no devices detected"));
    assert_eq!(state.summary, "0 / 0 devices");
}
