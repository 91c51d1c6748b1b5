//! Macros for building and handling extended errors

/// Wrap an error with a classification and a formatted user message
///
/// ```
/// use errhandle::{extend, Classification};
///
/// let err = extend!(std::io::Error::other("denied"), Classification::LogErr, "cannot open {}", "a.txt");
/// assert_eq!(err.to_string(), "cannot open a.txt: denied");
/// ```
#[macro_export]
macro_rules! extend {
    ($err:expr, $id:expr, $msg:literal) => {
        $crate::ExtendedError::new($err, $id, format!($msg))
    };
    ($err:expr, $id:expr, $fmt:literal, $($arg:tt)*) => {
        $crate::ExtendedError::new($err, $id, format!($fmt, $($arg)*))
    };
}

/// Handle an extended error with context values of any `Display` type
///
/// ```
/// use errhandle::{handle, logging, Classification, ExtendedError};
///
/// let err = ExtendedError::without_source(Classification::LogErr, "quota exceeded")
///     .set_printer(logging::print_fn(|_| {}))
///     .set_level(0, None);
/// let err = handle!(err, "upload", 3, "retrying");
/// assert!(err.is_handled());
/// ```
#[macro_export]
macro_rules! handle {
    ($err:expr $(,)?) => {
        $err.handle_now(&[])
    };
    ($err:expr, $($ctx:expr),+ $(,)?) => {
        $err.handle_now(&[$(&$ctx as &dyn ::std::fmt::Display),+])
    };
}
