// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing subscriber setup.
//!
//! The interactive viewer owns the terminal, so it logs to a file only. The one-shot `--print`
//! and `--json` modes log to stderr, keeping stdout clean for their output.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILTER_ENV: &str = "SYLLABUS_LOG";
pub const LOG_DIR_ENV: &str = "SYLLABUS_LOG_DIR";
pub const LOG_FILE_NAME: &str = "syllabus.log";
const DEFAULT_LOG_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn log_dir_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::temp_dir(),
    }
}

/// Directory the TUI log file is written to.
pub fn log_dir() -> PathBuf {
    log_dir_from(std::env::var_os(LOG_DIR_ENV))
}

/// File-only logging for TUI mode.
///
/// Returns the appender guard, which must outlive the TUI so buffered lines are flushed on exit.
/// Failures are reported on stderr and leave logging disabled.
pub fn init_tui() -> Option<WorkerGuard> {
    let log_dir = log_dir();
    if let Err(err) = fs::create_dir_all(&log_dir) {
        eprintln!("syllabus: failed to create log directory {}: {err}", log_dir.display());
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    if let Err(err) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("syllabus: failed to initialize logging: {err}");
        return None;
    }

    tracing::debug!(dir = %log_dir.display(), "file logging initialized");
    Some(guard)
}

/// Stderr logging for the non-interactive modes.
pub fn init_stderr() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    if let Err(err) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        eprintln!("syllabus: failed to initialize logging: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::log_dir_from;

    #[test]
    fn log_dir_defaults_to_temp_dir() {
        assert_eq!(log_dir_from(None), std::env::temp_dir());
        assert_eq!(log_dir_from(Some(OsString::new())), std::env::temp_dir());
    }

    #[test]
    fn log_dir_uses_env_value() {
        assert_eq!(
            log_dir_from(Some(OsString::from("/var/log/syllabus"))),
            PathBuf::from("/var/log/syllabus")
        );
    }
}
