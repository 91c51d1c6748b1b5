//! Core error types and definitions

use std::fmt;
use std::str::FromStr;

use backtrace::Backtrace;
use thiserror::Error;

use crate::logging::{LogFn, PrintFn};

/// Boxed error accepted as the wrapped cause of an [`ExtendedError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias using [`ExtendedError`]
pub type Result<T> = std::result::Result<T, ExtendedError>;

/// Handling policy attached to an [`ExtendedError`]
///
/// The label of each variant doubles as the prefix of the logged line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Log the error and hand it back to the caller
    #[default]
    LogErr,
    /// Log the error and panic
    Panic,
    /// Log the error and exit the process
    Fail,
}

impl Classification {
    /// Label used as the log prefix, trailing space included
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LogErr => "Log and return ",
            Self::Panic => "Log and panic ",
            Self::Fail => "Log and exit ",
        }
    }

    /// Whether handling this classification is expected to end the process
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Panic | Self::Fail)
    }

    /// Lenient lookup: anything that is not a fatal label becomes [`Classification::LogErr`]
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or(Self::LogErr)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Returned by the strict [`FromStr`] implementation of [`Classification`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseClassificationError {
    /// The id matches none of the three labels
    #[error("unknown classification id: {0:?}")]
    Unknown(String),
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [Self::LogErr, Self::Panic, Self::Fail]
            .into_iter()
            .find(|c| c.label().trim_end() == s.trim_end())
            .ok_or_else(|| ParseClassificationError::Unknown(s.to_owned()))
    }
}

impl From<&str> for Classification {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

/// How many stack frames to render when an error is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackDepth {
    /// No stack trace
    Off,
    /// The top `n` frames
    Frames(usize),
    /// Every captured frame
    Unlimited,
}

impl StackDepth {
    /// Frame limit, `None` when the trace is disabled
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Off => None,
            Self::Frames(n) => Some(n),
            Self::Unlimited => Some(usize::MAX),
        }
    }

    /// Whether stack rendering is disabled
    #[must_use]
    pub const fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }
}

impl Default for StackDepth {
    fn default() -> Self {
        Self::Frames(3)
    }
}

impl From<i32> for StackDepth {
    /// `0` disables the trace, negative values remove the limit.
    fn from(frames: i32) -> Self {
        match usize::try_from(frames) {
            Ok(0) => Self::Off,
            Ok(n) => Self::Frames(n),
            Err(_) => Self::Unlimited,
        }
    }
}

/// An error decorated with a user message and a handling policy
///
/// Defaults to level 1 logging and 3 frames of stack trace. Fatal
/// classifications start at level 4 with an unlimited trace.
pub struct ExtendedError {
    /// Wrapped cause, if any
    pub(super) wrapped: Option<BoxError>,
    /// Handling policy
    pub(super) id: Classification,
    /// Message shown to end users
    pub(super) user_message: String,
    /// Logging level, 0 disables the log call
    pub(super) level: u8,
    /// Function used for the diagnostic log line
    pub(super) log_fn: LogFn,
    /// Function used for the user-facing message
    pub(super) print_fn: PrintFn,
    /// Stack frames to render in the log line
    pub(super) stack_depth: StackDepth,
    /// Backtrace captured at construction
    pub(super) backtrace: Option<Backtrace>,
    /// Set once the handling protocol has run
    pub(super) handled: bool,
}
