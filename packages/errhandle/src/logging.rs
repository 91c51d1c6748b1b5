//! Log and print sinks used when an error is handled
//!
//! The default sinks write through the `log` facade, so output goes wherever
//! the installed logger sends it. [`init`] installs `env_logger`, which logs
//! to standard error with a timestamp prefix. Configure filtering with the
//! `RUST_LOG` environment variable:
//! - `RUST_LOG=info` - every handled error at level 1 and above
//! - `RUST_LOG=errhandle=warn` - only levels 2 and above

use std::io::Write as _;
use std::sync::{Arc, Once};

use log::Level;

use crate::error::Classification;

/// Target used by the default sinks
pub const LOG_TARGET: &str = "errhandle";

static INIT_LOGGER: Once = Once::new();

/// What a log function receives for one handled error
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Classification of the handled error, its label is the line prefix
    pub id: Classification,
    /// Severity level of the handled error
    pub level: u8,
    /// Context messages, verbose error and rendered stack trace
    pub detail: &'a str,
}

/// Function used to log diagnostic detail
pub type LogFn = Arc<dyn Fn(&LogRecord<'_>) + Send + Sync>;

/// Function used to print the user-facing message
pub type PrintFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Wrap a closure as a [`LogFn`]
pub fn log_fn<F>(f: F) -> LogFn
where
    F: Fn(&LogRecord<'_>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`PrintFn`]
pub fn print_fn<F>(f: F) -> PrintFn
where
    F: Fn(&str) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Maps a severity level onto a `log` level
///
/// Level 0 never reaches a log function.
#[must_use]
pub fn log_level(level: u8) -> Level {
    match level {
        0 | 1 => Level::Info,
        2 => Level::Warn,
        _ => Level::Error,
    }
}

/// Default log function
///
/// Writes the classification label followed by the detail. An empty detail
/// produces a bare label line.
pub fn default_log(record: &LogRecord<'_>) {
    log::log!(
        target: LOG_TARGET,
        log_level(record.level),
        "{}{}",
        record.id.label(),
        record.detail
    );
}

/// Default log function for fatal classifications
///
/// Logs at error level, flushes the logger, then panics for
/// [`Classification::Panic`] and exits with status 1 otherwise.
pub fn fatal_log(record: &LogRecord<'_>) {
    log::error!(target: LOG_TARGET, "{}{}", record.id.label(), record.detail);
    log::logger().flush();

    match record.id {
        Classification::Panic => panic!("{}{}", record.id.label(), record.detail.trim_end()),
        Classification::Fail | Classification::LogErr => std::process::exit(1),
    }
}

/// Default print function, writes the message and a newline to stdout
pub fn default_print(message: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{message}") {
        tracing::debug!("failed to print user message: {e}");
    }
}

/// Install `env_logger` as the global logger (call once at application startup)
///
/// Later calls are no-ops.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        if let Err(e) = env_logger::Builder::from_default_env()
            .format_timestamp_secs()
            .try_init()
        {
            tracing::debug!("logger already installed: {e}");
        }
    });
}

/// Initialize logging for test environments
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
