//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal, so while it runs logs either go to the
//! configured file or nowhere. Other commands log to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use crate::config::LogConfig;
use crate::error::{IncidentError, Result};

/// Where log output goes when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr, for non-interactive commands
    Stderr,
    /// Discard, so nothing is drawn over the fullscreen dashboard
    Tui,
}

/// Install the global fmt subscriber
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(false);

    let installed = match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, LogTarget::Tui) => builder.with_writer(std::io::sink).try_init(),
        (None, LogTarget::Stderr) => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| IncidentError::Other(format!("failed to install logger: {e}")))
}
