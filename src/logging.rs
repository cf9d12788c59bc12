//! Tracing setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! data directory. One-shot CLI commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ReelConfig;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "REELVIEW_LOG";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `<data dir>/reelview.log`
    File,
    /// Write to stderr
    Stderr,
}

impl LogTarget {
    fn default_filter(self) -> &'static str {
        match self {
            LogTarget::File => "reelview=info",
            LogTarget::Stderr => "reelview=warn",
        }
    }
}

/// Path of the log file used by the TUI
pub fn log_path() -> Result<PathBuf> {
    ReelConfig::data_dir().map(|dir| dir.join("reelview.log"))
}

fn env_filter(target: LogTarget) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| target.default_filter().into())
}

/// Install the global subscriber
pub fn init(target: LogTarget) -> Result<()> {
    let filter = env_filter(target);

    match target {
        LogTarget::File => {
            let path = log_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
        }
    }

    Ok(())
}
