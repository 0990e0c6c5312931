//! Absence checks on `Option` values
//!
//! `Option` is the absence-capable type here; a plain reference can never be
//! missing. `check_not_null` consumes its option and hands the contained
//! value back, so a passing check needs no second unwrap at the call site.

use crate::errors::{PreconditionError, PreconditionResult};

/// Check that a required reference is present, returning the contained value
pub fn check_not_null<T>(reference: Option<T>) -> PreconditionResult<T> {
    reference.ok_or_else(|| {
        PreconditionError::NullReference("Required reference is absent".to_string())
    })
}

/// Check that a required reference is present, failing with the given message
pub fn check_not_null_msg<T>(reference: Option<T>, message: &str) -> PreconditionResult<T> {
    reference.ok_or_else(|| PreconditionError::NullReference(message.to_string()))
}

/// Check that a required reference is present, with a lazily built message
pub fn check_not_null_with<T, F>(reference: Option<T>, message: F) -> PreconditionResult<T>
where
    F: FnOnce() -> String,
{
    reference.ok_or_else(|| PreconditionError::NullReference(message()))
}

/// Check that exactly one of two references is present
///
/// Fails when both are absent and also when both are present. The names
/// identify the two references in the failure message.
pub fn either_or_is_null<T: ?Sized, U: ?Sized>(
    one: Option<&T>,
    two: Option<&U>,
    name_one: &str,
    name_two: &str,
) -> PreconditionResult<()> {
    match (one.is_some(), two.is_some()) {
        (false, false) => Err(PreconditionError::InvalidArgument(format!(
            "Both {} and {} are absent, expected exactly one to be present",
            name_one, name_two
        ))),
        (true, true) => Err(PreconditionError::InvalidArgument(format!(
            "Both {} and {} are present, expected exactly one to be present",
            name_one, name_two
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_not_null() {
        assert_eq!(check_not_null(Some(42)).unwrap(), 42);

        let absent: Option<i32> = None;
        let err = check_not_null(absent).unwrap_err();
        assert!(matches!(err, PreconditionError::NullReference(_)));
    }

    #[test]
    fn test_check_not_null_returns_value_unchanged() {
        let value = vec!["a", "b"];
        let returned = check_not_null(Some(value.clone())).unwrap();
        assert_eq!(returned, value);
    }

    #[test]
    fn test_check_not_null_msg_and_with() {
        let absent: Option<&str> = None;
        let err = check_not_null_msg(absent, "api key is required").unwrap_err();
        assert_eq!(
            err,
            PreconditionError::NullReference("api key is required".to_string())
        );

        let absent: Option<&str> = None;
        let field = "output_path";
        let err = check_not_null_with(absent, || format!("missing field {}", field));
        assert_eq!(
            err.unwrap_err(),
            PreconditionError::NullReference("missing field output_path".to_string())
        );
    }

    #[test]
    fn test_check_not_null_with_is_lazy() {
        // The message closure must not run when the reference is present
        let result = check_not_null_with(Some(1), || panic!("must not be built"));
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_either_or_is_null() {
        let none: Option<&i32> = None;

        // Exactly one present is valid, on either side
        assert!(either_or_is_null(Some(&1), none, "a", "b").is_ok());
        assert!(either_or_is_null(none, Some(&2), "a", "b").is_ok());

        assert!(either_or_is_null(none, none, "a", "b").is_err());
        assert!(either_or_is_null(Some(&1), Some(&2), "a", "b").is_err());
    }

    #[test]
    fn test_either_or_is_null_names_in_message() {
        let none: Option<&str> = None;
        let err = either_or_is_null(none, none, "file_input", "stdin_input").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("file_input"));
        assert!(message.contains("stdin_input"));
        assert!(message.contains("absent"));
    }

    #[test]
    fn test_either_or_is_null_unsized_referents() {
        // str and [u8] referents must be accepted, not just sized types
        let token: Option<&str> = Some("abc");
        let payload: Option<&[u8]> = None;
        assert!(either_or_is_null(token, payload, "token", "payload").is_ok());
        assert!(either_or_is_null(token, Some(&b"xyz"[..]), "token", "payload").is_err());
    }

    #[test]
    fn test_either_or_is_null_mixed_types() {
        let count: Option<&usize> = Some(&3);
        let label: Option<&str> = None;
        assert!(either_or_is_null(count, label, "count", "label").is_ok());
    }
}
