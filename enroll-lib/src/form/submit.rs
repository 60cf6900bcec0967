//! Submission boundary

use super::FormInputs;
use super::FormState;
use crate::error::SinkError;
use crate::sink::RegistrationSink;

/// Message used when a blocked submission has neither a password nor an
/// email message to show.
pub const GENERIC_FAILURE_MESSAGE: &str = "Check the form and try again.";

/// Why a submission did not complete.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Validation blocked the submission; the sink was never called.
    #[error("{message}")]
    Blocked {
        /// First blocking message: the password's, else the email's, else
        /// the generic fallback.
        message: String,
        /// The state that blocked the submission.
        state: FormState,
    },

    /// The sink rejected or failed the forwarded submission.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Re-validates the inputs and forwards them to the sink when permitted.
///
/// Validation always runs against the latest inputs, so a stale enabled
/// button cannot bypass the gate. On block the sink is never invoked. The
/// forwarded call is a single attempt: no retry, no queuing.
pub async fn submit(inputs: &FormInputs, sink: &dyn RegistrationSink) -> Result<(), SubmitError> {
    let state = FormState::recompute(inputs);
    if !state.can_submit {
        let message = first_blocking_message(&state);
        log::debug!("submission blocked: {message}");
        return Err(SubmitError::Blocked { message, state });
    }
    sink.submit(&inputs.email, &inputs.password).await?;
    Ok(())
}

fn first_blocking_message(state: &FormState) -> String {
    state
        .password
        .message()
        .or_else(|| state.email.message())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
