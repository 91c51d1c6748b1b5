//! Extension traits classifying `Result` and `Option` values in place

use std::fmt;

use super::types::{BoxError, Classification, ExtendedError};

/// Attach a handling policy to the error of a `Result`
pub trait ResultExt<T> {
    /// Wrap the error in an unhandled [`ExtendedError`]
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn classify(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
    ) -> Result<T, ExtendedError>;

    /// Wrap the error in an [`ExtendedError`] and handle it right away
    ///
    /// # Errors
    ///
    /// Returns the handled error when `self` is `Err`.
    fn or_handle(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
        context: &[&dyn fmt::Display],
    ) -> Result<T, ExtendedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn classify(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
    ) -> Result<T, ExtendedError> {
        // no `map_err` closure: constructor frames must stay contiguous at the top of the trace
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ExtendedError::new(e, id, user_message)),
        }
    }

    fn or_handle(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
        context: &[&dyn fmt::Display],
    ) -> Result<T, ExtendedError> {
        self.classify(id, user_message)
            .map_err(|e| e.handle_now(context))
    }
}

/// Turn a missing value into an [`ExtendedError`]
pub trait OptionExt<T> {
    /// `None` becomes an unhandled [`ExtendedError`] without a wrapped source
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `None`.
    fn ok_or_classified(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
    ) -> Result<T, ExtendedError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_classified(
        self,
        id: impl Into<Classification>,
        user_message: impl Into<String>,
    ) -> Result<T, ExtendedError> {
        match self {
            Some(value) => Ok(value),
            None => Err(ExtendedError::without_source(id, user_message)),
        }
    }
}
