//! TUI event handling
//!
//! Polls crossterm for keyboard input and maps key presses onto
//! [`AppAction`]s. The command surface is deliberately tiny: toggle
//! filter, manual refresh, quit. Anything else is ignored, never
//! buffered.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::AppAction;

/// Event handler for TUI input
pub struct EventHandler {
    /// Poll timeout; keeps the loop responsive between refresh ticks
    poll_timeout: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
        }
    }

    /// Poll for the next terminal event.
    ///
    /// Returns `Some(Event)` if one occurred, `None` once the poll
    /// timeout elapses.
    pub fn poll(&self) -> Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Map a key event onto an action.
    ///
    /// Only key presses dispatch; release and repeat events from
    /// enhanced-keyboard terminals are dropped.
    pub fn handle_key(&self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
            KeyCode::Char('f') => AppAction::ToggleFilter,
            KeyCode::Char('r') => AppAction::Refresh,
            _ => AppAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_quit_keys() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle_key(press(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(handler.handle_key(press(KeyCode::Esc)), AppAction::Quit);
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
    }

    #[test]
    fn test_filter_toggle_key() {
        let handler = EventHandler::new();
        assert_eq!(
            handler.handle_key(press(KeyCode::Char('f'))),
            AppAction::ToggleFilter
        );
    }

    #[test]
    fn test_manual_refresh_key() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle_key(press(KeyCode::Char('r'))), AppAction::Refresh);
    }

    #[test]
    fn test_unrecognized_input_ignored() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle_key(press(KeyCode::Char('x'))), AppAction::None);
        assert_eq!(handler.handle_key(press(KeyCode::Enter)), AppAction::None);
        assert_eq!(handler.handle_key(press(KeyCode::Up)), AppAction::None);
    }

    #[test]
    fn test_release_events_dropped() {
        let handler = EventHandler::new();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(key), AppAction::None);
    }
}
