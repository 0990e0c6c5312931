//! Boolean argument and state checks
//!
//! These are the entry points most callers reach for: assert that an
//! expression about an argument or about object state holds, and fail with
//! a typed error when it does not.

use crate::errors::{PreconditionError, PreconditionResult};

/// Check that an expression about an argument is true
pub fn check_argument(expression: bool) -> PreconditionResult<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::InvalidArgument(
            "Expected argument expression to be true".to_string(),
        ))
    }
}

/// Check an argument expression, failing with the given message
pub fn check_argument_msg(expression: bool, message: &str) -> PreconditionResult<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::InvalidArgument(message.to_string()))
    }
}

/// Check an argument expression with a lazily built message
///
/// The closure only runs on failure, so callers can format context values
/// without paying for it on the success path.
pub fn check_argument_with<F>(expression: bool, message: F) -> PreconditionResult<()>
where
    F: FnOnce() -> String,
{
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::InvalidArgument(message()))
    }
}

/// Check that an expression about the caller's state is true
pub fn check_state(expression: bool) -> PreconditionResult<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::IllegalState(
            "Expected state expression to be true".to_string(),
        ))
    }
}

/// Check a state expression, failing with the given message
pub fn check_state_msg(expression: bool, message: &str) -> PreconditionResult<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::IllegalState(message.to_string()))
    }
}

/// Check a state expression with a lazily built message
pub fn check_state_with<F>(expression: bool, message: F) -> PreconditionResult<()>
where
    F: FnOnce() -> String,
{
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::IllegalState(message()))
    }
}
