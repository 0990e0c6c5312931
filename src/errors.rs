//! Error handling for the precondition library
//!
//! This module provides the error taxonomy for precondition checks. Each
//! failed check maps to exactly one variant, carrying a message that names
//! the violated condition and the offending values.

use thiserror::Error;

/// Result type for precondition checks
pub type PreconditionResult<T> = Result<T, PreconditionError>;

/// Enum representing different precondition violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreconditionError {
    /// An argument expression evaluated to false
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A state expression evaluated to false
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// A required reference is absent
    #[error("Null reference: {0}")]
    NullReference(String),

    /// An index is outside the valid range
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// A required element, key, or value is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// An element, key, or value is present where it must not be
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A collection is empty where a non-empty one is required
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
}
