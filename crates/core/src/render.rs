//! Render-state derivation
//!
//! Builds display-ready rows from a filtered record list: column
//! allocation, truncation, padding, per-row emphasis, and the summary
//! line. Pure and idempotent — identical inputs produce byte-identical
//! output, so the result can be snapshot-tested without a terminal.

use crate::device::DeviceRecord;

/// Fixed width of the bus column.
pub const BUS_WIDTH: usize = 3;
/// Fixed width of the id column (fits `????:????`).
pub const ID_WIDTH: usize = 9;
/// The name column never shrinks below this, whatever the terminal says.
pub const NAME_MIN_WIDTH: usize = 30;
/// Spacing between adjacent columns.
const COLUMN_GAP: usize = 2;

/// Truncation marker appended to cut descriptions.
pub const ELLIPSIS: char = '…';

/// Style classification for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    /// Firmware-mode device, drawn highlighted
    Emphasized,
    /// Everything else, non-essential columns drawn muted
    Dimmed,
}

/// One display-ready table row. All fields are already padded or
/// truncated to their column widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub bus: String,
    pub id: String,
    pub name: String,
    pub emphasis: RowEmphasis,
}

/// Everything the terminal surface needs for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    /// Column header row
    pub header: RenderRow,
    /// Body rows; never empty — an empty filtered set yields one
    /// explanatory placeholder row
    pub rows: Vec<RenderRow>,
    /// `"{filtered} / {total} devices"`
    pub summary: String,
    /// Allocated width of the name column
    pub name_width: usize,
}

/// Build the render state for one cycle.
///
/// `total` is the unfiltered record count, used only for the summary
/// line. `terminal_width` is the full width available to the table.
pub fn build(filtered: &[DeviceRecord], total: usize, terminal_width: u16) -> RenderState {
    let name_width = name_column_width(terminal_width);

    let header = RenderRow {
        bus: fit("Bus", BUS_WIDTH),
        id: fit("ID", ID_WIDTH),
        name: fit("Device", name_width),
        emphasis: RowEmphasis::Dimmed,
    };

    let rows = if filtered.is_empty() {
        vec![placeholder_row(total, name_width)]
    } else {
        filtered
            .iter()
            .map(|record| RenderRow {
                bus: fit(&record.bus, BUS_WIDTH),
                id: fit(&record.id, ID_WIDTH),
                name: fit(&record.description, name_width),
                emphasis: if record.kind.is_firmware_mode() {
                    RowEmphasis::Emphasized
                } else {
                    RowEmphasis::Dimmed
                },
            })
            .collect()
    };

    RenderState {
        header,
        rows,
        summary: format!("{} / {} devices", filtered.len(), total),
        name_width,
    }
}

/// Remaining width for the name column, floored at [`NAME_MIN_WIDTH`].
fn name_column_width(terminal_width: u16) -> usize {
    let fixed = BUS_WIDTH + ID_WIDTH + 2 * COLUMN_GAP;
    NAME_MIN_WIDTH.max((terminal_width as usize).saturating_sub(fixed))
}

fn placeholder_row(total: usize, name_width: usize) -> RenderRow {
    let message = if total == 0 {
        "no devices detected"
    } else {
        "no devices match the current filter"
    };
    RenderRow {
        bus: fit("", BUS_WIDTH),
        id: fit("", ID_WIDTH),
        name: fit(message, name_width),
        emphasis: RowEmphasis::Dimmed,
    }
}

/// Pad `text` to exactly `width` character columns, truncating with an
/// ellipsis when it does not fit.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        format!("{text:<width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("ab", 5), "ab   ");
        assert_eq!(fit("ab", 5).chars().count(), 5);
    }

    #[test]
    fn test_fit_truncates_long_text_with_ellipsis() {
        let fitted = fit("abcdefgh", 5);
        assert_eq!(fitted.chars().count(), 5);
        assert!(fitted.ends_with(ELLIPSIS));
        assert_eq!(fitted, "abcd…");
    }

    #[test]
    fn test_fit_counts_chars_not_bytes() {
        let fitted = fit("héllo wörld yes indeed", 10);
        assert_eq!(fitted.chars().count(), 10);
    }

    #[test]
    fn test_name_width_floor() {
        assert_eq!(name_column_width(20), NAME_MIN_WIDTH);
        assert_eq!(name_column_width(80), 80 - BUS_WIDTH - ID_WIDTH - 4);
    }
}
