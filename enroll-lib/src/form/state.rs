//! Registration form state

use crate::validate::ValidationResult;
use crate::validate::validate_confirm_password;
use crate::validate::validate_email;
use crate::validate::validate_password;

/// Raw input snapshot for the registration form.
///
/// Owned by the calling screen, never persisted. `confirm_password` is `None`
/// on surfaces without a confirmation field and validates the same as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

impl FormInputs {
    /// Creates a snapshot with all three fields present.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }
}

/// Aggregate validation snapshot for the registration form.
///
/// Recomputed from scratch on every input change; it holds no identity beyond
/// the current snapshot and retains nothing across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: ValidationResult,
    pub password: ValidationResult,
    pub confirm: ValidationResult,
    /// True iff all three field results are valid. There is no
    /// partial-submit state.
    pub can_submit: bool,
}

impl FormState {
    /// Runs all three validators over the inputs and derives the submit gate.
    pub fn recompute(inputs: &FormInputs) -> FormState {
        let email = validate_email(&inputs.email);
        let password = validate_password(&inputs.password);
        let confirm = validate_confirm_password(
            &inputs.password,
            inputs.confirm_password.as_deref().unwrap_or(""),
        );
        let can_submit = email.is_valid && password.is_valid && confirm.is_valid;
        FormState {
            email,
            password,
            confirm,
            can_submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid_enables_submit() {
        let inputs = FormInputs::new("user@gmail.com", "Abcdef1!", "Abcdef1!");
        let state = FormState::recompute(&inputs);
        assert!(state.can_submit);
        assert_eq!(state.email.message(), None);
        assert_eq!(state.password.message(), None);
        assert_eq!(state.confirm.message(), None);
    }

    #[test]
    fn test_any_invalid_field_disables_submit() {
        let inputs = FormInputs::new("user@gmail.com", "Abcdef1!", "abcdef1!");
        let state = FormState::recompute(&inputs);
        assert!(!state.can_submit);
        assert!(state.confirm.message().is_some());
    }

    #[test]
    fn test_absent_confirmation_validates_as_empty() {
        let inputs = FormInputs {
            email: "user@gmail.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: None,
        };
        let state = FormState::recompute(&inputs);
        assert!(!state.can_submit);
        assert_eq!(state.confirm.message(), Some("Confirm your password."));
    }

    #[test]
    fn test_gate_matches_field_results_over_generated_inputs() {
        let emails = ["", "user@gmail.com", "USER.name+1@gmail.com", "user@gmail.com.br", "nope"];
        let passwords = ["", "Abcdef1!", "abcdefgh", "Ab1!", "ABCDEF1!", "Abcdefg1"];
        let confirms = [None, Some(""), Some("Abcdef1!"), Some("abcdef1!")];

        for email in emails {
            for password in passwords {
                for confirm in confirms {
                    let inputs = FormInputs {
                        email: email.to_string(),
                        password: password.to_string(),
                        confirm_password: confirm.map(str::to_string),
                    };
                    let state = FormState::recompute(&inputs);
                    assert_eq!(
                        state.can_submit,
                        state.email.is_valid && state.password.is_valid && state.confirm.is_valid,
                        "gate mismatch for {inputs:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let inputs = FormInputs::new("user@gmail.com", "Abcdef1!", "Abcdef1?");
        assert_eq!(FormState::recompute(&inputs), FormState::recompute(&inputs));
    }
}
