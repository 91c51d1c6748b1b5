//! Stack trace capture and rendering

use std::error::Error;
use std::fmt::{self, Write as _};

use backtrace::{Backtrace, BacktraceFrame};

use super::types::{BoxError, ExtendedError, StackDepth};

/// Frames whose symbols contain one of these are skipped at the top of a trace
const INTERNAL_FRAMES: &[&str] = &["errhandle::error::", "backtrace::"];

/// Capability of an error to expose a captured stack trace
pub trait StackTracer {
    /// The captured trace, if any
    fn stack_trace(&self) -> Option<&Backtrace>;
}

/// Wraps any error with the stack captured where it was created
///
/// Display is transparent; the alternate form (`{:#}`) appends the trace.
#[derive(Debug)]
pub struct Traced {
    source: BoxError,
    backtrace: Backtrace,
}

impl Traced {
    /// Wrap `err` and capture the current stack
    #[must_use]
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self {
            source: err.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }

    /// The wrapped error
    #[must_use]
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Drop the trace and return the wrapped error
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for Traced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return write!(f, "{}", self.source);
        }

        writeln!(f, "{}", self.source)?;
        writeln!(f, "Backtrace:")?;
        write!(f, "{}", render_stack(&self.backtrace, StackDepth::Unlimited))
    }
}

impl Error for Traced {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl StackTracer for Traced {
    fn stack_trace(&self) -> Option<&Backtrace> {
        Some(&self.backtrace)
    }
}

impl StackTracer for ExtendedError {
    /// A trace found in the wrapped chain wins over the one captured at construction.
    fn stack_trace(&self) -> Option<&Backtrace> {
        self.wrapped
            .as_deref()
            .and_then(|e| find_stack_trace(e))
            .or(self.backtrace.as_ref())
    }
}

/// Walk `err` and its sources, returning the first captured trace
pub fn find_stack_trace<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Backtrace> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(traced) = e.downcast_ref::<Traced>() {
            return traced.stack_trace();
        }
        if let Some(extended) = e.downcast_ref::<ExtendedError>() {
            return extended.stack_trace();
        }
        current = e.source();
    }
    None
}

/// Render up to `depth` frames as `name` / `\tfile:line` lines
///
/// Leading frames spent inside this crate are skipped.
#[must_use]
pub fn render_stack(backtrace: &Backtrace, depth: StackDepth) -> String {
    let Some(limit) = depth.limit() else {
        return String::new();
    };

    let mut resolved = backtrace.clone();
    resolved.resolve();

    let mut out = String::new();
    for frame in resolved
        .frames()
        .iter()
        .skip_while(|frame| is_internal(frame))
        .take(limit)
    {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            let _ = writeln!(out, "{:?}", frame.ip());
            continue;
        }

        for symbol in symbols {
            let _ = match symbol.name() {
                Some(name) => writeln!(out, "{name:#}"),
                None => writeln!(out, "<unknown>"),
            };
            if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                let _ = writeln!(out, "\t{}:{line}", file.display());
            }
        }
    }
    out
}

/// Strip [`Traced`] layers, which display the same as what they wrap
pub(crate) fn untraced<'a>(mut err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    while let Some(traced) = err.downcast_ref::<Traced>() {
        err = traced.source.as_ref();
    }
    err
}

fn is_internal(frame: &BacktraceFrame) -> bool {
    let symbols = frame.symbols();
    !symbols.is_empty()
        && symbols.iter().all(|symbol| {
            symbol.name().is_some_and(|name| {
                let name = format!("{name:#}");
                INTERNAL_FRAMES.iter().any(|internal| name.contains(internal))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use crate::config::HandlerConfig;
    use crate::error::Classification;

    #[test]
    fn display_non_alternate_prints_only_source() {
        let err = Traced::new(io::Error::other("boom"));

        assert_eq!(format!("{err}"), "boom");
    }

    #[test]
    fn display_alternate_includes_backtrace_label() {
        let err = Traced::new(io::Error::other("boom"));

        let s = format!("{err:#}");
        assert!(s.starts_with("boom\n"), "got: {s:?}");
        assert!(s.contains("\nBacktrace:\n"), "got: {s:?}");
    }

    #[test]
    fn source_returns_inner_error() {
        let err = Traced::new(io::Error::other("boom"));

        let src = err.source().expect("source should exist");
        assert_eq!(src.to_string(), "boom");
        assert_eq!(err.inner().to_string(), "boom");
    }

    #[test]
    fn off_depth_renders_nothing() {
        let err = Traced::new("boom");

        assert_eq!(render_stack(&err.backtrace, StackDepth::Off), "");
    }

    #[test]
    fn unlimited_depth_renders_frames() {
        let err = Traced::new("boom");

        let rendered = render_stack(&err.backtrace, StackDepth::Unlimited);
        assert!(!rendered.trim().is_empty());
        assert!(render_stack(&err.backtrace, StackDepth::Frames(1)).len() <= rendered.len());
    }

    #[test]
    fn plain_errors_have_no_trace() {
        let err = io::Error::other("boom");

        assert!(find_stack_trace(&err).is_none());
    }

    #[test]
    fn trace_is_found_through_the_chain() {
        let config = HandlerConfig::default().with_backtrace_capture(false);
        let extended = ExtendedError::with_config(
            Some(Box::new(Traced::new("boom"))),
            Classification::LogErr,
            "outer",
            &config,
        );
        assert!(extended.stack_trace().is_some());

        let bare = ExtendedError::with_config(
            Some(Box::new(io::Error::other("boom"))),
            Classification::LogErr,
            "outer",
            &config,
        );
        assert!(bare.stack_trace().is_none());
        assert!(find_stack_trace(&bare).is_none());
    }

    #[test]
    fn untraced_strips_nested_wrappers() {
        let err = Traced::new(Traced::new(io::Error::other("boom")));

        let inner = untraced(&err);
        assert!(inner.downcast_ref::<io::Error>().is_some());
    }
}
