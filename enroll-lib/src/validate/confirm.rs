//! Confirm-password validation

use super::ValidationResult;

/// Message shown while either password field is still empty.
pub(crate) const CONFIRM_EMPTY_MESSAGE: &str = "Confirm your password.";

/// Message shown when both fields are filled but differ.
pub(crate) const CONFIRM_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Validates that the confirmation matches the password.
///
/// While either side is empty the result asks for the confirmation rather
/// than reporting a mismatch. Comparison is exact: case-sensitive, no
/// trimming.
pub fn validate_confirm_password(password: &str, confirm: &str) -> ValidationResult {
    if password.is_empty() || confirm.is_empty() {
        return ValidationResult::invalid(CONFIRM_EMPTY_MESSAGE);
    }
    if password == confirm {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(CONFIRM_MISMATCH_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_passwords() {
        let result = validate_confirm_password("Abcdef1!", "Abcdef1!");
        assert!(result.is_valid);
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let result = validate_confirm_password("Abcdef1!", "abcdef1!");
        assert!(!result.is_valid);
        assert_eq!(result.message(), Some(CONFIRM_MISMATCH_MESSAGE));
    }

    #[test]
    fn test_no_trimming() {
        assert!(!validate_confirm_password("Abcdef1!", "Abcdef1! ").is_valid);
    }

    #[test]
    fn test_both_empty_asks_for_confirmation() {
        let result = validate_confirm_password("", "");
        assert!(!result.is_valid);
        assert_eq!(result.message(), Some(CONFIRM_EMPTY_MESSAGE));
    }

    #[test]
    fn test_either_side_empty_asks_for_confirmation() {
        assert_eq!(
            validate_confirm_password("Abcdef1!", "").message(),
            Some(CONFIRM_EMPTY_MESSAGE)
        );
        assert_eq!(
            validate_confirm_password("", "Abcdef1!").message(),
            Some(CONFIRM_EMPTY_MESSAGE)
        );
    }
}
