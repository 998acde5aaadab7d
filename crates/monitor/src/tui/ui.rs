//! TUI rendering with ratatui
//!
//! Turns the prepared [`RenderState`] into widgets. All text fitting
//! (padding, truncation) already happened in the builder; this module
//! only attaches styles and hands regions to ratatui.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use usbtop_core::render::{RenderRow, RowEmphasis};

use super::app::{App, CycleState};

/// Colors used in the UI
mod colors {
    use ratatui::style::Color;

    pub const TITLE: Color = Color::Cyan;
    pub const BORDER: Color = Color::Blue;
    pub const MUTED: Color = Color::DarkGray;
    pub const ID: Color = Color::Cyan;
    pub const FIRMWARE: Color = Color::Yellow;
    pub const BADGE_FG: Color = Color::White;
    pub const BADGE_BG: Color = Color::Magenta;
    pub const HEARTBEAT: Color = Color::Green;
    pub const KEY_HINT: Color = Color::Cyan;
}

/// Render the complete UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Status line
            Constraint::Min(5),    // Device table
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Render the top header bar: counts, DFU badge, uptime
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let firmware_count = app.firmware_count();

    let mut spans = vec![
        Span::styled(
            "USB Devices ",
            Style::default().fg(colors::TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", app.devices.len()),
            Style::default().fg(colors::MUTED),
        ),
    ];

    if firmware_count > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} DFU ", firmware_count),
            Style::default()
                .fg(colors::BADGE_FG)
                .bg(colors::BADGE_BG)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("uptime {}", app.format_uptime()),
        Style::default().fg(colors::MUTED),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" usbtop ")
            .border_style(Style::default().fg(colors::BORDER)),
    );

    frame.render_widget(header, area);
}

/// Render the status line: filter state, summary, fetch latency
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let filter_span = if app.config.filter_dfu {
        Span::styled(
            " DFU only ",
            Style::default()
                .fg(colors::BADGE_FG)
                .bg(colors::BADGE_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" all devices ", Style::default().fg(colors::MUTED))
    };

    let summary = app.render_state(table_width(area)).summary;

    let mut spans = vec![
        filter_span,
        Span::raw("  "),
        Span::styled(summary, Style::default().fg(colors::MUTED)),
    ];

    if let Some(duration) = app.last_fetch_duration {
        spans.push(Span::styled(
            format!("  fetch {:.1}ms", duration.as_secs_f64() * 1000.0),
            Style::default().fg(colors::MUTED),
        ));
    }
    if app.cycle == CycleState::Fetching {
        spans.push(Span::styled("  refreshing…", Style::default().fg(colors::MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the device table
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.render_state(table_width(area));

    let mut lines = Vec::with_capacity(state.rows.len() + 1);
    lines.push(row_line(&state.header, Style::default().fg(colors::MUTED)));
    for row in &state.rows {
        lines.push(styled_row_line(row));
    }

    let table = Paragraph::new(lines).block(
        Block::default()
            .title(" Devices ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );

    frame.render_widget(table, area);
}

/// Inner text width of the bordered table block.
fn table_width(area: Rect) -> u16 {
    area.width.saturating_sub(2)
}

fn row_line(row: &RenderRow, style: Style) -> Line<'_> {
    Line::from(vec![
        Span::styled(row.bus.as_str(), style),
        Span::raw("  "),
        Span::styled(row.id.as_str(), style),
        Span::raw("  "),
        Span::styled(row.name.as_str(), style),
    ])
}

fn styled_row_line(row: &RenderRow) -> Line<'_> {
    match row.emphasis {
        RowEmphasis::Emphasized => Line::from(vec![
            Span::styled(row.bus.as_str(), Style::default().fg(colors::MUTED)),
            Span::raw("  "),
            Span::styled(row.id.as_str(), Style::default().fg(colors::ID)),
            Span::raw("  "),
            Span::styled(
                row.name.as_str(),
                Style::default()
                    .fg(colors::FIRMWARE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        RowEmphasis::Dimmed => Line::from(vec![
            Span::styled(row.bus.as_str(), Style::default().fg(colors::MUTED)),
            Span::raw("  "),
            Span::styled(row.id.as_str(), Style::default().fg(colors::ID)),
            Span::raw("  "),
            Span::raw(row.name.as_str()),
        ]),
    }
}

/// Render the bottom key-hint bar with the refresh heartbeat
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let heartbeat = if app.refresh_count % 2 == 0 { "●" } else { "○" };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(heartbeat, Style::default().fg(colors::HEARTBEAT)),
        Span::raw(" "),
        Span::styled("f", Style::default().fg(colors::KEY_HINT)),
        Span::raw(" filter  "),
        Span::styled("r", Style::default().fg(colors::KEY_HINT)),
        Span::raw(" refresh  "),
        Span::styled("q", Style::default().fg(colors::KEY_HINT)),
        Span::raw(" quit"),
    ]))
    .style(Style::default().fg(colors::MUTED));

    frame.render_widget(footer, area);
}
