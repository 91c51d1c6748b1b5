//! Error constructors and configuration methods

use std::sync::Arc;

use backtrace::Backtrace;

use super::types::{BoxError, Classification, ExtendedError, StackDepth};
use crate::config::HandlerConfig;
use crate::logging::{LogFn, PrintFn};

impl ExtendedError {
    /// Wrap `err` with a classification and a user message, using the default config
    ///
    /// Any id other than a fatal one is normalized to [`Classification::LogErr`].
    #[must_use]
    pub fn new(
        err: impl Into<BoxError>,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
    ) -> Self {
        Self::with_config(Some(err.into()), id, user_message, &HandlerConfig::default())
    }

    /// Create an error that wraps nothing, using the default config
    #[must_use]
    pub fn without_source(id: impl Into<Classification>, user_message: impl Into<String>) -> Self {
        Self::with_config(None, id, user_message, &HandlerConfig::default())
    }

    /// Create an error from an explicit config
    ///
    /// Fatal classifications start at level 4 with an unlimited trace and
    /// the config's fatal logger.
    #[must_use]
    pub fn with_config(
        wrapped: Option<BoxError>,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
        config: &HandlerConfig,
    ) -> Self {
        let backtrace = if config.capture_backtrace {
            Some(Backtrace::new_unresolved())
        } else {
            None
        };

        let id = id.into();
        let (level, stack_depth, log_fn) = if id.is_fatal() {
            (4, StackDepth::Unlimited, Arc::clone(&config.fatal_log_fn))
        } else {
            (config.level, config.stack_depth, Arc::clone(&config.log_fn))
        };

        Self {
            wrapped,
            id,
            user_message: user_message.into(),
            level,
            log_fn,
            print_fn: Arc::clone(&config.print_fn),
            stack_depth,
            backtrace,
            handled: false,
        }
    }

    /// Change the log level, and optionally the log function
    ///
    /// Level 0 inhibits logging; the user message is still printed.
    #[must_use]
    pub fn set_level(mut self, level: u8, log_fn: Option<LogFn>) -> Self {
        self.level = level;
        if let Some(log_fn) = log_fn {
            self.log_fn = log_fn;
        }
        self
    }

    /// Change the function used for the user-facing message
    #[must_use]
    pub fn set_printer(mut self, print_fn: PrintFn) -> Self {
        self.print_fn = print_fn;
        self
    }

    /// Change the number of stack frames logged
    ///
    /// `0` turns the trace off, a negative value removes the limit.
    #[must_use]
    pub fn set_stack_depth(mut self, depth: impl Into<StackDepth>) -> Self {
        self.stack_depth = depth.into();
        self
    }

    /// Handling policy
    #[must_use]
    pub fn id(&self) -> Classification {
        self.id
    }

    /// Message shown to end users
    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Current log level
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current stack budget
    #[must_use]
    pub fn stack_depth(&self) -> StackDepth {
        self.stack_depth
    }

    /// Whether the handling protocol has run at least once
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// The wrapped cause
    #[must_use]
    pub fn wrapped(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.wrapped.as_deref()
    }

    /// Take the wrapped cause out of this error
    #[must_use]
    pub fn into_inner(self) -> Option<BoxError> {
        self.wrapped
    }
}
