//! Extended errors with attached handling policy
//!
//! Provides the decoration layer:
//! - [`ExtendedError`] carrying message, classification, level and sinks
//! - The [`handle`] dispatcher for arbitrary boxed errors
//! - Stack capture through [`Traced`] and the [`StackTracer`] capability
//! - Extension traits to classify `Result` and `Option` values in place

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod handle;
pub mod macros;
pub mod stack;
pub mod types;

// Re-export all public types and traits
pub use extensions::{OptionExt, ResultExt};
pub use handle::{concat_messages, handle, handle_with, Handling};
pub use stack::{find_stack_trace, render_stack, StackTracer, Traced};
pub use types::{
    BoxError, Classification, ExtendedError, ParseClassificationError, Result, StackDepth,
};
