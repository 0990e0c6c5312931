//! String emptiness and prefix checks

use crate::errors::{PreconditionError, PreconditionResult};

/// Check that a string is non-empty after trimming whitespace
///
/// A whitespace-only string counts as empty. The message names the value in
/// the error, e.g. `check_not_empty_str(name, "bucket name")`.
pub fn check_not_empty_str(value: &str, message: &str) -> PreconditionResult<()> {
    if value.is_empty() {
        return Err(PreconditionError::InvalidArgument(format!(
            "{}: string is empty",
            message
        )));
    }
    if value.trim().is_empty() {
        return Err(PreconditionError::InvalidArgument(format!(
            "{}: string is blank",
            message
        )));
    }
    Ok(())
}

/// Check that a string starts with the given prefix, case-sensitively
///
/// Both the prefix and the string under test must be non-blank.
pub fn check_string_starts_with(prefix: &str, to_check: &str) -> PreconditionResult<()> {
    check_not_empty_str(prefix, "prefix")?;
    check_not_empty_str(to_check, "string to check")?;

    if to_check.starts_with(prefix) {
        Ok(())
    } else {
        Err(PreconditionError::InvalidArgument(format!(
            "Expected '{}' to start with '{}'",
            to_check, prefix
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_not_empty_str() {
        assert!(check_not_empty_str("a", "field").is_ok());
        assert!(check_not_empty_str("  a  ", "field").is_ok());

        let err = check_not_empty_str("", "bucket name").unwrap_err();
        assert_eq!(
            err,
            PreconditionError::InvalidArgument("bucket name: string is empty".to_string())
        );
    }

    #[test]
    fn test_check_not_empty_str_whitespace_only() {
        // Whitespace-only counts as empty
        let err = check_not_empty_str("   ", "bucket name").unwrap_err();
        assert_eq!(
            err,
            PreconditionError::InvalidArgument("bucket name: string is blank".to_string())
        );
        assert!(check_not_empty_str("\t\n", "field").is_err());
    }

    #[test]
    fn test_check_string_starts_with() {
        assert!(check_string_starts_with("http://", "http://example.com").is_ok());
        assert!(check_string_starts_with("/", "/etc/hosts").is_ok());

        let err = check_string_starts_with("http://", "ftp://example.com").unwrap_err();
        assert_eq!(
            err,
            PreconditionError::InvalidArgument(
                "Expected 'ftp://example.com' to start with 'http://'".to_string()
            )
        );
    }

    #[test]
    fn test_check_string_starts_with_is_case_sensitive() {
        assert!(check_string_starts_with("http://", "HTTP://example.com").is_err());
    }

    #[test]
    fn test_check_string_starts_with_rejects_blank_inputs() {
        assert!(check_string_starts_with("", "http://example.com").is_err());
        assert!(check_string_starts_with("   ", "http://example.com").is_err());
        assert!(check_string_starts_with("http://", "").is_err());
    }
}
