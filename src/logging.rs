//! Logging to a file under the config directory
//!
//! The terminal belongs to the UI, so all tracing output goes to
//! `~/.roster-tui/roster-tui.log`. `RUST_LOG` wins over the level given on
//! the command line.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "roster_tui=info";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("roster-tui.log"))
}

/// Install the global subscriber, returning the log file path
pub fn init(level: Option<&str>) -> Result<PathBuf> {
    let path = log_path().context("Could not determine log directory")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let default_filter = match level {
        Some(level) => format!("roster_tui={}", level),
        None => DEFAULT_FILTER.to_string(),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized to: {:?}", path);
    Ok(path)
}
