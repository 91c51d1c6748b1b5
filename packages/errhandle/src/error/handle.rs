//! The handling protocol and the free dispatcher

use std::fmt::{self, Write as _};

use super::stack::{render_stack, StackTracer};
use super::types::{BoxError, Classification, ExtendedError};
use crate::config::HandlerConfig;
use crate::logging::LogRecord;

impl ExtendedError {
    /// Print the user message, log the diagnostic detail and return self marked handled
    ///
    /// `context` is concatenated into the log line: the first value is a
    /// label, the rest are joined with `", "`. Fatal classifications do not
    /// return with the default fatal logger.
    #[must_use]
    pub fn handle_now(mut self, context: &[&dyn fmt::Display]) -> Self {
        if self.handled {
            tracing::debug!(id = %self.id, "handling an already handled error again");
        }

        let log_message = concat_messages(context);
        let display = self.to_string();
        (self.print_fn)(&display);

        let trace = match self.stack_trace() {
            Some(backtrace) if !self.stack_depth.is_off() => {
                render_stack(backtrace, self.stack_depth)
            }
            _ => String::new(),
        };

        if self.level > 0 {
            let detail = if self.stack_depth.is_off() {
                format!("{log_message}\nPrinted for user: {self}\n")
            } else {
                format!("{log_message}\nPrinted for user: {self:#}\n{trace}")
            };
            (self.log_fn)(&LogRecord {
                id: self.id,
                level: self.level,
                detail: &detail,
            });
        }

        self.handled = true;
        self
    }
}

/// How [`handle`] should treat the error it is given
#[derive(Clone, Copy)]
pub enum Handling<'a> {
    /// Context messages for an error that is already an [`ExtendedError`]
    ///
    /// A plain error handled this way is passed through untouched.
    Context(&'a [&'a dyn fmt::Display]),
    /// Promote a plain error to an [`ExtendedError`] before handling it
    ///
    /// `message` becomes the user message. For an error that is already an
    /// [`ExtendedError`], `message` is used as context and `id` is ignored.
    Classify {
        /// Handling policy for the promoted error
        id: Classification,
        /// Parts of the user message
        message: &'a [&'a dyn fmt::Display],
    },
}

impl<'a> Handling<'a> {
    fn messages(self) -> &'a [&'a dyn fmt::Display] {
        match self {
            Self::Context(messages) | Self::Classify { message: messages, .. } => messages,
        }
    }
}

impl fmt::Debug for Handling<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context(messages) => f.debug_tuple("Context").field(&messages.len()).finish(),
            Self::Classify { id, message } => f
                .debug_struct("Classify")
                .field("id", id)
                .field("message", &join_message(message))
                .finish(),
        }
    }
}

/// Handle any error according to its attached policy
///
/// - `None` is returned as is
/// - An [`ExtendedError`] is handled with the supplied messages as context
/// - A plain error with [`Handling::Classify`] is promoted, then handled
/// - A plain error with [`Handling::Context`] is returned unchanged
///
/// Promoted errors use the default config; see [`handle_with`].
pub fn handle(err: Option<BoxError>, handling: Handling<'_>) -> Option<BoxError> {
    handle_with(err, handling, &HandlerConfig::default())
}

/// Like [`handle`], promoting plain errors with the sinks and defaults of `config`
///
/// An error that is already an [`ExtendedError`] keeps the sinks it was built with.
pub fn handle_with(
    err: Option<BoxError>,
    handling: Handling<'_>,
    config: &HandlerConfig,
) -> Option<BoxError> {
    let err = err?;

    match err.downcast::<ExtendedError>() {
        Ok(extended) => {
            let handled: BoxError = Box::new((*extended).handle_now(handling.messages()));
            Some(handled)
        }
        Err(err) => match handling {
            Handling::Classify { id, message } => {
                let extended =
                    ExtendedError::with_config(Some(err), id, join_message(message), config);
                let handled: BoxError = Box::new(extended.handle_now(&[]));
                Some(handled)
            }
            Handling::Context(_) => {
                tracing::debug!("unclassified error passed through: {err}");
                Some(err)
            }
        },
    }
}

/// Concatenate context messages into a log line
///
/// The first message is a label (trailing spaces trimmed, followed by
/// `": "`), middle messages are followed by `", "` and the last one by
/// nothing. A newline ends the line when any message was given; a single
/// message therefore yields `"label: \n"`.
#[must_use]
pub fn concat_messages(messages: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    if messages.is_empty() {
        return out;
    }

    let last = messages.len() - 1;
    for (i, message) in messages.iter().enumerate() {
        if i == 0 {
            let label = message.to_string();
            let _ = write!(out, "{}: ", label.trim_end_matches(' '));
        } else if i == last {
            let _ = write!(out, "{message}");
        } else {
            let _ = write!(out, "{message}, ");
        }
    }
    out.push('\n');
    out
}

/// Message parts joined like [`concat_messages`] without the line ending
/// or a dangling label separator
pub(crate) fn join_message(parts: &[&dyn fmt::Display]) -> String {
    let mut message = concat_messages(parts);
    if message.ends_with('\n') {
        message.pop();
    }
    if message.ends_with(": ") {
        message.truncate(message.len() - 2);
    }
    message
}
