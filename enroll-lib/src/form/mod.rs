//! Form state aggregation and submission gating.
//!
//! [`FormState::recompute`] runs the field validators over a raw input
//! snapshot and derives the submit gate; callers invoke it on every input
//! change and render the per-field messages it returns. [`submit`] is the
//! boundary that re-validates and forwards to a sink.

mod indicator;
mod login;
mod state;
mod submit;

pub use indicator::FieldIndicator;
pub use login::LoginState;
pub use state::FormInputs;
pub use state::FormState;
pub use submit::GENERIC_FAILURE_MESSAGE;
pub use submit::SubmitError;
pub use submit::submit;
