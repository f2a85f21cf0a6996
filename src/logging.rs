//! Logger setup for the terminal binaries.
//!
//! The terminal owns stdout while the alternate screen is active, so log
//! records go to a file (`GRIDWORLD_LOG`) or nowhere. `RUST_LOG` alone turns
//! on stderr logging for debugging outside raw mode.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::{Context, Result};
use env_logger::{Target, WriteStyle};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tui_gridworld_core=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Append log records to this file instead of stderr.
    pub log_path: Option<PathBuf>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            log_path: None,
            write_style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Read `GRIDWORLD_LOG` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("GRIDWORLD_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let env_filter = lookup("RUST_LOG").filter(|s| !s.trim().is_empty());
        Self {
            env_filter,
            // Files never want ANSI escapes.
            write_style: if log_path.is_some() {
                WriteStyle::Never
            } else {
                WriteStyle::Auto
            },
            log_path,
        }
    }

    /// Nothing to log to without a file or an explicit filter.
    pub fn is_enabled(&self) -> bool {
        self.log_path.is_some() || self.env_filter.is_some()
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Opening the log file is the only fallible
/// step and happens before the logger is installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    if !config.is_enabled() {
        return Ok(());
    }

    let file = match &config.log_path {
        Some(path) => Some(open_log_file(path)?),
        None => None,
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match &config.env_filter {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        if let Some(file) = file {
            builder.target(Target::Pipe(Box::new(file)));
        }

        // Another logger may already be installed (tests); keep it.
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
