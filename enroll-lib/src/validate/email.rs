//! Email validation

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationResult;

/// Message shown when the email rule fails.
pub(crate) const EMAIL_MESSAGE: &str = "Enter a valid Gmail address (e.g. user@gmail.com).";

// Anchored: the whole input must be a Gmail address, not merely contain one.
static GMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").expect("Invalid email pattern")
});

/// Validates an email address against the Gmail-only registration rule.
///
/// The local part may contain letters, digits and `._%+-`; the domain must be
/// exactly `gmail.com`, case-sensitive. Empty input is invalid. There is no
/// network or MX lookup and no Unicode domain support.
pub fn validate_email(email: &str) -> ValidationResult {
    if GMAIL_PATTERN.is_match(email) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(EMAIL_MESSAGE)
    }
}
