//! Field validators for the signup flow.
//!
//! Pure functions mapping raw input text to a [`ValidationResult`]. Invalid
//! input is a normal result value, never an error: every input, including
//! empty, maps to a deterministic outcome.

mod confirm;
mod email;
mod password;
mod result;

pub use confirm::validate_confirm_password;
pub use email::validate_email;
pub use password::PasswordPolicy;
pub use password::SPECIAL_CHARS;
pub use password::validate_password;
pub use result::ValidationResult;
