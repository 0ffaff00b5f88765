//! File-backed tracing setup. Stdout belongs to the UI, so logs never go
//! to the terminal.

use crate::error::{DashboardError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber appending to `path`, filtered by
/// `filter` (falls back to `info` when the filter does not parse).
pub fn init(path: &Path, filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| DashboardError::LogFile {
            path: path.display().to_string(),
            source,
        })?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| DashboardError::Logging(e.to_string()))
}
