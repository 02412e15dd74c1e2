//! Resource name validation.
//!
//! The upstream API uses hierarchical string identifiers
//! (`sources/github/owner/repo`, `sessions/abc123`) that double as URL path
//! fragments. These checks are a fast local fail before a name is
//! interpolated into a request path; they do not attempt to validate
//! upstream-specific segment semantics.

use crate::error::{PatchworkError, PatchworkResult};

/// Prefix carried by every source resource name.
pub const SOURCE_PREFIX: &str = "sources/";

/// Prefix carried by every session resource name.
pub const SESSION_PREFIX: &str = "sessions/";

/// Validate a source resource name, returning it unchanged.
pub fn validate_source_name(name: &str) -> PatchworkResult<&str> {
    validate(name, SOURCE_PREFIX)
}

/// Validate a session resource name, returning it unchanged.
pub fn validate_session_name(name: &str) -> PatchworkResult<&str> {
    validate(name, SESSION_PREFIX)
}

fn validate<'a>(name: &'a str, prefix: &str) -> PatchworkResult<&'a str> {
    if name.is_empty() {
        return Err(PatchworkError::InvalidArgument(format!(
            "resource name must not be empty (expected \"{prefix}...\")"
        )));
    }
    if !name.starts_with(prefix) || name.len() == prefix.len() {
        return Err(PatchworkError::InvalidArgument(format!(
            "resource name \"{name}\" must start with \"{prefix}\""
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_pass_through_unchanged() {
        assert_eq!(
            validate_source_name("sources/github/octo/widgets").unwrap(),
            "sources/github/octo/widgets"
        );
        assert_eq!(
            validate_session_name("sessions/abc123").unwrap(),
            "sessions/abc123"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            validate_source_name(""),
            Err(PatchworkError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_session_name(""),
            Err(PatchworkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_prefix_rejected() {
        assert!(matches!(
            validate_session_name("abc123"),
            Err(PatchworkError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_source_name("sessions/abc123"),
            Err(PatchworkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bare_prefix_rejected() {
        assert!(matches!(
            validate_session_name("sessions/"),
            Err(PatchworkError::InvalidArgument(_))
        ));
    }
}
