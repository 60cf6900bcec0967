//! Per-field validation outcome

/// Outcome of checking a single field.
///
/// `message` is present exactly when the field is invalid; callers hide the
/// field's error indicator when it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the field passed validation.
    pub is_valid: bool,
    /// Human-readable description of the failure.
    pub message: Option<String>,
}

impl ValidationResult {
    /// Creates a passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// Creates a failing result with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }

    /// Returns the message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_message() {
        let result = ValidationResult::valid();
        assert!(result.is_valid);
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_invalid_carries_message() {
        let result = ValidationResult::invalid("nope");
        assert!(!result.is_valid);
        assert_eq!(result.message(), Some("nope"));
    }
}
