// src/log.rs
//
// Log sink setup + the short logging macros used across the crate.
// Everything goes through `tracing`; the file layer writes to .store/debug.log.

use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing as __tracing;

/// Where log lines go besides the debug file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Console {
    /// GUI: file only.
    Off,
    /// CLI: also mirror to stderr (stdout carries the report).
    Stderr,
}

/// Install the global subscriber. Keep the returned guard alive for the whole
/// run, otherwise buffered lines are lost on exit.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(console: Console, verbose: bool) -> Option<WorkerGuard> {
    init_in(Path::new(STORE_DIR), console, verbose)
}

/// Same as `init` with the log directory given. If the directory or file
/// cannot be created, logging continues without the file layer.
pub fn init_in(dir: &Path, console: Console, verbose: bool) -> Option<WorkerGuard> {
    let default_level = if verbose { "gdp_scrape=debug" } else { "gdp_scrape=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match file_appender(dir) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = match console {
        Console::Stderr => Some(fmt::layer().with_target(false).with_writer(std::io::stderr)),
        Console::Off => None,
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    match installed {
        Ok(()) => guard,
        Err(_) => None, // someone (a test harness) got there first
    }
}

/// `dir/debug.log`, created along with `dir`. `None` when either fails.
fn file_appender(dir: &Path) -> Option<RollingFileAppender> {
    let built = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir);

    match built {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Logging: no log file in {}: {e}", dir.display());
            None
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
