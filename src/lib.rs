//! # Precondition Check Library
//!
//! Precondition and argument checking utilities, used to validate conditions
//! at the start of other routines. Each check either returns its validated
//! input unchanged or fails with a typed error describing the violated
//! condition, so callers can propagate failures with `?`.
//!
//! ## Features
//!
//! - Boolean argument and state checks with fixed or lazily built messages
//! - Absence checks on `Option` values, returning the contained value
//! - Element and position index bound checks
//! - Collection and map membership checks
//! - String emptiness and prefix checks
//! - An exactly-one-of-two-references check
//!
//! The library is stateless and side-effect-free apart from the returned
//! errors, so the checks are safe to call from any number of threads.

mod errors;
pub mod checks;

pub use checks::*;
pub use errors::{PreconditionError, PreconditionResult};

/// Re-export of the full check set for convenience
pub mod prelude {
    pub use crate::checks::*;
    pub use crate::errors::{PreconditionError, PreconditionResult};
}

/// Version of the precondition library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
