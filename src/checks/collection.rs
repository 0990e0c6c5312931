//! Collection membership and emptiness checks

use crate::errors::{PreconditionError, PreconditionResult};
use std::fmt;

/// Check that a collection contains the given value
pub fn check_contains<T>(collection: &[T], value: &T) -> PreconditionResult<()>
where
    T: PartialEq + fmt::Debug,
{
    if collection.contains(value) {
        Ok(())
    } else {
        Err(PreconditionError::NotFound(format!(
            "Collection does not contain {:?}",
            value
        )))
    }
}

/// Check that a collection has at least one element
pub fn check_not_empty<T>(collection: &[T]) -> PreconditionResult<()> {
    if collection.is_empty() {
        Err(PreconditionError::EmptyCollection(
            "Collection must not be empty".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Check that a collection is non-empty, failing with the given message
pub fn check_not_empty_msg<T>(collection: &[T], message: &str) -> PreconditionResult<()> {
    if collection.is_empty() {
        Err(PreconditionError::EmptyCollection(message.to_string()))
    } else {
        Ok(())
    }
}
