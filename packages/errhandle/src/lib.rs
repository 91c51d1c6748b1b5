//! Error decoration and one-call handling
//!
//! This crate lets a caller attach presentation and severity metadata to an
//! error at the point it is created:
//! - A user-facing message printed when the error is handled
//! - A classification selecting the policy (log and return, panic or exit)
//! - A log level and a stack-trace budget for the diagnostic log line
//! - Pluggable log and print functions
//!
//! Later a single [`ExtendedError::handle_now`] (or the free [`handle`]
//! dispatcher) prints, logs and returns or terminates accordingly.
//!
//! ```no_run
//! use errhandle::{Classification, ExtendedError};
//!
//! fn load() -> Result<String, ExtendedError> {
//!     std::fs::read_to_string("settings.toml").map_err(|e| {
//!         ExtendedError::new(e, Classification::LogErr, "could not read settings")
//!             .set_stack_depth(0)
//!             .handle_now(&[&"load", &"settings.toml"])
//!     })
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::HandlerConfig;
pub use error::*;
pub use logging::{LogFn, LogRecord, PrintFn};
