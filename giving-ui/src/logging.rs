//! Subscriber setup for the `giving-calculator` binary.
//!
//! Everything is known before the subscriber is installed, so nothing here
//! is reloadable. The filter comes from `--log-level`, then the preferences
//! file, then `RUST_LOG`, then [`DEFAULT_FILTER`]. Events go to stdout unless
//! `--quiet` is given, and are appended to a log file when one is configured.

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::warn;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Where log output goes and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive such as `debug` or `info,giving_core=trace`.
    /// `None` defers to `RUST_LOG`.
    pub filter: Option<String>,
    /// Keeps events off stdout, where the session prints the table.
    pub quiet: bool,
    pub file: Option<PathBuf>,
}

/// Holds the log file open; flushes it when dropped at the end of `main`.
#[must_use = "dropping the guard flushes and detaches the log file"]
pub struct LogGuard {
    file: Option<Arc<File>>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let mut handle: &File = file;
            if let Err(e) = handle.flush() {
                warn!(error = %e, "failed to flush log file");
            }
        }
    }
}

/// `2026-10-16T09:30:00.123+02:00` in local time.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

fn build_filter(
    explicit: Option<&str>,
    from_env: Option<String>,
) -> Result<EnvFilter> {
    if let Some(directive) = explicit {
        return EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level '{directive}'"));
    }
    // A bad RUST_LOG is not worth refusing to start over.
    Ok(from_env
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER)))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber. Call once, before mounting the widget.
pub fn init(settings: &LogSettings) -> Result<LogGuard> {
    let filter = build_filter(
        settings.filter.as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    )?;
    let file = settings
        .file
        .as_deref()
        .map(open_log_file)
        .transpose()?
        .map(Arc::new);

    let stdout_layer = (!settings.quiet).then(|| {
        fmt::layer()
            .with_timer(LocalTime)
            .with_target(false)
            .with_ansi(io::stdout().is_terminal())
    });
    let file_layer = file.clone().map(|file| {
        fmt::layer()
            .with_timer(LocalTime)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(file)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a tracing subscriber is already installed")?;

    Ok(LogGuard { file })
}
