//! Login form state

use crate::validate::ValidationResult;
use crate::validate::validate_email;
use crate::validate::validate_password;

/// Aggregate validation snapshot for the login form.
///
/// The login surface has no confirmation field; the gate is the AND of the
/// email and password results. The same strict rules gate both surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub email: ValidationResult,
    pub password: ValidationResult,
    /// True iff both field results are valid.
    pub can_submit: bool,
}

impl LoginState {
    /// Runs both validators and derives the submit gate.
    pub fn recompute(email: &str, password: &str) -> LoginState {
        let email = validate_email(email);
        let password = validate_password(password);
        let can_submit = email.is_valid && password.is_valid;
        LoginState {
            email,
            password,
            can_submit,
        }
    }
}
