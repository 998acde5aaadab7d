//! Dashboard application state
//!
//! Owns the current device list, the persisted filter configuration,
//! and the refresh-cycle state machine. All mutation happens on the
//! runner's single event loop; the fetch task communicates results back
//! by message only.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::warn;
use usbtop_core::render::RenderState;
use usbtop_core::{DeviceRecord, filter, render};

use crate::config::Config;

/// Where the current refresh cycle stands.
///
/// The render pass runs synchronously inside the loop iteration that
/// leaves `Fetching`, so it needs no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Waiting for the next tick or input event
    Idle,
    /// An enumeration call is in flight on the fetch task
    Fetching,
}

/// User action produced by the input dispatcher, applied by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// No state change
    None,
    /// Quit immediately
    Quit,
    /// Toggle the firmware-only filter and persist it
    ToggleFilter,
    /// Fetch now, regardless of elapsed interval
    Refresh,
}

/// Main application state
pub struct App {
    /// Devices from the most recent successful cycle
    pub devices: Vec<DeviceRecord>,
    /// Persisted filter configuration
    pub config: Config,
    /// Where toggles are persisted to
    config_path: PathBuf,
    /// Refresh-cycle state machine
    pub cycle: CycleState,
    /// Start of the most recent fetch, for tick gating
    last_fetch_started: Option<Instant>,
    /// Duration of the most recent completed fetch
    pub last_fetch_duration: Option<Duration>,
    /// Completed refresh cycles since startup
    pub refresh_count: u64,
    /// Process start, for the uptime readout
    started: Instant,
    /// Should quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            devices: Vec::new(),
            config,
            config_path,
            cycle: CycleState::Idle,
            last_fetch_started: None,
            last_fetch_duration: None,
            refresh_count: 0,
            started: Instant::now(),
            should_quit: false,
        }
    }

    /// Whether the interval timer should start a fetch now.
    ///
    /// Ticks only fire in `Idle`; a tick that lands while a fetch is in
    /// flight is dropped, never queued.
    pub fn tick_due(&self, interval: Duration) -> bool {
        if self.cycle != CycleState::Idle {
            return false;
        }
        match self.last_fetch_started {
            Some(started) => started.elapsed() >= interval,
            None => true,
        }
    }

    /// Enter `Fetching`. Returns false when a fetch is already in
    /// flight, in which case the caller must not spawn another.
    pub fn begin_fetch(&mut self) -> bool {
        if self.cycle != CycleState::Idle {
            return false;
        }
        self.cycle = CycleState::Fetching;
        self.last_fetch_started = Some(Instant::now());
        true
    }

    /// Complete a cycle: swap in the new list wholesale and return to
    /// `Idle`. No correlation with the previous list is attempted.
    pub fn finish_fetch(&mut self, devices: Vec<DeviceRecord>, fetch_duration: Duration) {
        self.devices = devices;
        self.last_fetch_duration = Some(fetch_duration);
        self.refresh_count += 1;
        self.cycle = CycleState::Idle;
    }

    /// Give up on a fetch whose task died without reporting. The stale
    /// device list stays on screen; the next tick retries normally.
    pub fn abandon_fetch(&mut self) {
        if self.cycle == CycleState::Fetching {
            warn!("fetch task went away without a result, skipping cycle");
            self.cycle = CycleState::Idle;
        }
    }

    /// How long the current fetch has been in flight, if one is.
    pub fn fetch_age(&self) -> Option<Duration> {
        match self.cycle {
            CycleState::Fetching => self.last_fetch_started.map(|s| s.elapsed()),
            CycleState::Idle => None,
        }
    }

    /// Toggle the firmware-only filter and persist the new value.
    ///
    /// Persistence happens before the next render. A write failure is
    /// logged and otherwise ignored; the in-memory toggle still applies.
    pub fn toggle_filter(&mut self) {
        self.config.filter_dfu = !self.config.filter_dfu;
        if let Err(e) = self.config.save(&self.config_path) {
            warn!("failed to persist filter toggle: {:#}", e);
        }
    }

    /// Derive the display rows for the current state. Pure with respect
    /// to `self`; uses only the already-fetched device list.
    pub fn render_state(&self, terminal_width: u16) -> RenderState {
        let filtered = filter::apply(&self.devices, self.config.filter_dfu);
        render::build(&filtered, self.devices.len(), terminal_width)
    }

    /// Count of firmware-mode devices in the current list.
    pub fn firmware_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|d| d.kind.is_firmware_mode())
            .count()
    }

    /// Uptime formatted as `MM:SS`, growing to `HH:MM:SS` past an hour.
    pub fn format_uptime(&self) -> String {
        let secs = self.started.elapsed().as_secs();
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let secs = secs % 60;
        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, mins, secs)
        } else {
            format!("{:02}:{:02}", mins, secs)
        }
    }
}
