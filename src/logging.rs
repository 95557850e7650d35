//! File logging setup
//!
//! The library only emits `tracing` events; applications embedding it call
//! [`init`] once to send them to a log file. `RUST_LOG` directives, when
//! set, take precedence over the configured level.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Filter from `RUST_LOG`-style directives, falling back to `level` when
/// they are absent, empty or unparsable
fn build_filter(level: Level, directives: Option<&str>) -> EnvFilter {
    let fallback = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .parse_lossy("")
    };

    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid RUST_LOG '{}': {}", directives, e);
            fallback()
        }),
        None => fallback(),
    }
}

/// Install a file-backed subscriber at the given level.
///
/// Returns `None` when logging is off. The returned guard must be kept alive
/// for buffered lines to be flushed.
pub fn init(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = log_path();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(tracing_level, directives.as_deref()))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("cfasg logging at level {:?} to {:?}", level, log_path);

    Ok(Some(guard))
}

pub fn log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("cfasg").join("cfasg.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".cfasg").join("cfasg.log");
    }
    PathBuf::from("cfasg.log")
}
