//! Construction-time configuration for extended errors
//!
//! A [`HandlerConfig`] is read once when an [`ExtendedError`] is built.
//! Changing a config afterwards has no effect on errors already built from it.
//!
//! [`ExtendedError`]: crate::ExtendedError

use std::fmt;

use crate::error::StackDepth;
use crate::logging::{self, LogFn, PrintFn};

/// Sinks and defaults applied when an [`ExtendedError`](crate::ExtendedError) is built
#[derive(Clone)]
pub struct HandlerConfig {
    pub(crate) log_fn: LogFn,
    pub(crate) fatal_log_fn: LogFn,
    pub(crate) print_fn: PrintFn,
    pub(crate) level: u8,
    pub(crate) stack_depth: StackDepth,
    pub(crate) capture_backtrace: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_fn: logging::log_fn(logging::default_log),
            fatal_log_fn: logging::log_fn(logging::fatal_log),
            print_fn: logging::print_fn(logging::default_print),
            level: 1,
            stack_depth: StackDepth::default(),
            capture_backtrace: true,
        }
    }
}

impl HandlerConfig {
    /// Config with the default sinks, level 1 and 3 stack frames
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log function for non-fatal classifications
    #[must_use]
    pub fn with_logger(mut self, log_fn: LogFn) -> Self {
        self.log_fn = log_fn;
        self
    }

    /// Log function for [`Classification::Panic`](crate::Classification::Panic)
    /// and [`Classification::Fail`](crate::Classification::Fail)
    #[must_use]
    pub fn with_fatal_logger(mut self, log_fn: LogFn) -> Self {
        self.fatal_log_fn = log_fn;
        self
    }

    /// Function printing the user-facing message
    #[must_use]
    pub fn with_printer(mut self, print_fn: PrintFn) -> Self {
        self.print_fn = print_fn;
        self
    }

    /// Initial level for non-fatal classifications
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Initial stack budget for non-fatal classifications
    #[must_use]
    pub fn with_stack_depth(mut self, depth: impl Into<StackDepth>) -> Self {
        self.stack_depth = depth.into();
        self
    }

    /// Whether to capture a backtrace when an error is built
    ///
    /// Without it only a [`Traced`](crate::Traced) source can provide a trace.
    #[must_use]
    pub fn with_backtrace_capture(mut self, capture: bool) -> Self {
        self.capture_backtrace = capture;
        self
    }

    /// Initial level for non-fatal classifications
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Initial stack budget for non-fatal classifications
    #[must_use]
    pub fn stack_depth(&self) -> StackDepth {
        self.stack_depth
    }
}

impl fmt::Debug for HandlerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("level", &self.level)
            .field("stack_depth", &self.stack_depth)
            .field("capture_backtrace", &self.capture_backtrace)
            .finish_non_exhaustive()
    }
}
