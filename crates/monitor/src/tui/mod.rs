//! Terminal User Interface
//!
//! The refresh loop: fetch → parse → filter → render, re-driven by a
//! fixed-interval timer and by user input, with the enumeration call
//! running on a spawned task so input handling never blocks.
//!
//! # Layout
//!
//! - **Header**: device counts, DFU badge, uptime
//! - **Status line**: filter state and fetch latency
//! - **Table**: one row per device after filtering
//! - **Footer**: key hints and refresh heartbeat
//!
//! # Keybindings
//!
//! - `f`: Toggle the firmware-only (DFU) filter
//! - `r`: Refresh immediately
//! - `q` / `Esc` / `Ctrl+C`: Quit

pub mod app;
pub mod events;
pub mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;
use usbtop_core::{EnumerationSource, parse_listing};

use crate::config::Config;

pub use app::{App, AppAction, CycleState};
pub use events::EventHandler;

/// Observed refresh intervals in the wild range from snappy to lazy;
/// anything outside gets clamped.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(200);
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// A fetch task that has not reported after this long is presumed dead
/// and its cycle is abandoned.
const STUCK_FETCH_GRACE: Duration = Duration::from_secs(10);

/// Messages sent from the fetch task to the loop
#[derive(Debug)]
pub enum TuiMessage {
    /// One enumeration cycle completed (possibly with an empty list)
    DevicesFetched {
        devices: Vec<usbtop_core::DeviceRecord>,
        fetch_duration: Duration,
    },
}

/// TUI runner that owns the terminal and drives the refresh loop
pub struct TuiRunner {
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    app: App,
    /// Event handler
    event_handler: EventHandler,
    /// Enumeration adapter, cloned into each fetch task
    source: EnumerationSource,
    /// Tick interval between automatic refreshes
    interval: Duration,
    /// Channel for receiving fetch results
    message_rx: mpsc::Receiver<TuiMessage>,
    /// Channel handed to fetch tasks
    message_tx: mpsc::Sender<TuiMessage>,
}

impl TuiRunner {
    /// Create a new TUI runner and take over the terminal.
    pub fn new(
        config: Config,
        config_path: PathBuf,
        source: EnumerationSource,
        interval: Duration,
    ) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let (message_tx, message_rx) = mpsc::channel(16);

        let interval = interval.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL);

        Ok(Self {
            terminal,
            app: App::new(config, config_path),
            event_handler: EventHandler::new(),
            source,
            interval,
            message_rx,
            message_tx,
        })
    }

    /// Run the refresh loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI, interval {}ms", self.interval.as_millis());

        // First cycle starts immediately rather than one interval in.
        self.spawn_fetch();

        loop {
            // Apply any completed fetches before drawing.
            while let Ok(msg) = self.message_rx.try_recv() {
                self.handle_message(msg);
            }

            // A fetch whose task died reports nothing; give up on it so
            // the loop does not wedge in `Fetching`.
            if self.app.fetch_age().is_some_and(|age| age > STUCK_FETCH_GRACE) {
                self.app.abandon_fetch();
            }

            // Interval tick; dropped unless the cycle is idle.
            if self.app.tick_due(self.interval) {
                self.spawn_fetch();
            }

            self.terminal.draw(|f| ui::render(f, &self.app))?;

            if let Some(event) = self.event_handler.poll()? {
                let action = match event {
                    Event::Key(key) => self.event_handler.handle_key(key),
                    // Re-rendered with fresh dimensions on the next draw
                    Event::Resize(_, _) => AppAction::None,
                    _ => AppAction::None,
                };
                self.handle_action(action);
            }

            if self.app.should_quit {
                break;
            }
        }

        info!("TUI shutting down");
        Ok(())
    }

    /// Apply a fetch result to the application state.
    fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::DevicesFetched {
                devices,
                fetch_duration,
            } => {
                self.app.finish_fetch(devices, fetch_duration);
            }
        }
    }

    /// Apply a user action.
    ///
    /// Toggling mutates and persists the config synchronously, so the
    /// draw on the next loop iteration already reflects it — even with
    /// a fetch in flight.
    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::None => {}
            AppAction::Quit => self.app.should_quit = true,
            AppAction::ToggleFilter => self.app.toggle_filter(),
            AppAction::Refresh => self.spawn_fetch(),
        }
    }

    /// Spawn one enumeration cycle, unless one is already in flight.
    fn spawn_fetch(&mut self) {
        if !self.app.begin_fetch() {
            return;
        }

        let source = self.source.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let started = Instant::now();
            // Failures already degraded to an empty snapshot inside the
            // source; an empty device list is a valid cycle result.
            let snapshot = source.snapshot().await;
            let devices = parse_listing(&snapshot);
            let _ = tx
                .send(TuiMessage::DevicesFetched {
                    devices,
                    fetch_duration: started.elapsed(),
                })
                .await;
        });
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the dashboard. Entry point for TUI mode.
pub async fn run(
    config: Config,
    config_path: PathBuf,
    source: EnumerationSource,
    interval: Duration,
) -> Result<()> {
    let mut runner = TuiRunner::new(config, config_path, source, interval)?;
    runner.run().await
}
