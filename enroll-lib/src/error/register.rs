//! Remote registration error types

/// Errors that can occur during a remote registration call.
///
/// None of these are retried automatically; the caller receives exactly one
/// outcome per attempt.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The configured registration endpoint is not a usable URL.
    #[error("Invalid registration endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network failure while sending the request or reading the response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("Server error (HTTP {status})")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Response decode error: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },

    /// Any other failure, carrying its own message.
    #[error("{0}")]
    Other(String),
}

impl RegisterError {
    /// Creates a new decode error with the raw response body.
    pub fn decode(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is a server error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns the generic user-facing failure line for this error kind.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEndpoint(_) => "Invalid registration address.".to_string(),
            Self::Transport(_) => "Network error. Check your connection.".to_string(),
            Self::Server { status } => format!("Server error ({status})."),
            Self::Decode { .. } => "Could not read the server response.".to_string(),
            Self::Other(message) => message.clone(),
        }
    }
}
