//! Display and trait implementations for ExtendedError

use std::fmt;

use super::stack::untraced;
use super::types::ExtendedError;

impl fmt::Display for ExtendedError {
    /// `user message: wrapped error`, or the user message alone.
    ///
    /// The alternate form (`{:#}`) also lists the sources below the wrapped error.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message)?;

        let Some(wrapped) = &self.wrapped else {
            return Ok(());
        };
        write!(f, ": {wrapped}")?;

        if f.alternate() {
            let mut source = untraced(wrapped.as_ref()).source();
            while let Some(cause) = source {
                write!(f, "\nCaused by: {cause}")?;
                source = untraced(cause).source();
            }
        }

        Ok(())
    }
}

impl fmt::Debug for ExtendedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedError")
            .field("id", &self.id)
            .field("user_message", &self.user_message)
            .field("wrapped", &self.wrapped)
            .field("level", &self.level)
            .field("stack_depth", &self.stack_depth)
            .field("handled", &self.handled)
            .finish_non_exhaustive()
    }
}

impl std::error::Error for ExtendedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.wrapped
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
