//! Precondition check functions
//!
//! One submodule per input category. Every check either returns its
//! validated input (or unit) or fails with a `PreconditionError` naming the
//! violated condition.

pub mod argument;
pub mod collection;
pub mod index;
pub mod map;
pub mod option;
pub mod string;

// Re-export all checks for convenience
pub use argument::*;
pub use collection::*;
pub use index::*;
pub use map::*;
pub use option::*;
pub use string::*;
