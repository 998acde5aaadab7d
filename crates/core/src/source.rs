//! External enumeration command adapter
//!
//! Runs the OS enumeration command and captures its stdout for the
//! parser. This is the only effectful module in the crate. Failure
//! policy: a missing command, non-zero exit, I/O error, or timeout all
//! degrade to an empty snapshot for that cycle — the refresh loop never
//! sees a hard error from here.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default enumeration command, invoked with no arguments.
pub const DEFAULT_COMMAND: &str = "lsusb";

/// A stuck enumeration call only delays the next cycle this long.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Adapter around the external enumeration command.
#[derive(Debug, Clone)]
pub struct EnumerationSource {
    command: String,
    timeout: Duration,
}

impl Default for EnumerationSource {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl EnumerationSource {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Capture one enumeration snapshot.
    ///
    /// Returns stdout verbatim (trimming is the parser's job). Any
    /// failure is logged at `warn` and yields an empty snapshot.
    pub async fn snapshot(&self) -> String {
        match self.run().await {
            Ok(text) => {
                debug!(command = %self.command, bytes = text.len(), "enumeration snapshot");
                text
            }
            Err(e) => {
                warn!("enumeration failed, showing empty listing: {}", e);
                String::new()
            }
        }
    }

    async fn run(&self) -> Result<String> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.command)
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output(),
        )
        .await
        .map_err(|_| {
            Error::Enumeration(format!(
                "{} timed out after {}ms",
                self.command,
                self.timeout.as_millis()
            ))
        })?
        .map_err(|e| Error::Enumeration(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            return Err(Error::Enumeration(format!(
                "{} exited with {}",
                self.command, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
