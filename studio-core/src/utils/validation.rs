//! Input validation helpers

use crate::utils::AppError;

/// Validate a name typed on the login screen before registering it.
///
/// Only the empty string counts as missing; names are otherwise stored
/// exactly as typed, surrounding whitespace included.
pub fn validate_member_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::name_required());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    #[test]
    fn test_empty_name_is_required_field() {
        let err = validate_member_name("").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        assert!(validate_member_name(" ").is_ok());
        assert!(validate_member_name(" Alice ").is_ok());
    }

    #[test]
    fn test_long_name_is_accepted() {
        assert!(validate_member_name(&"a".repeat(201)).is_ok());
        assert!(validate_member_name(&"é".repeat(5000)).is_ok());
    }
}
