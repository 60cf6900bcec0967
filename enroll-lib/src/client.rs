//! Remote registration client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::error::RegisterError;
use crate::error::SinkError;
use crate::sink::RegistrationSink;

/// Client for the remote registration endpoint.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across threads.
/// Each registration is a single best-effort request; there is no retry,
/// cancellation, or in-flight limit here.
///
/// # Example
///
/// ```ignore
/// use enroll_lib::RegistrationClient;
///
/// let client = RegistrationClient::builder()
///     .url("https://example.com/api")
///     .build();
///
/// let response = client.register("user@gmail.com", "Abcdef1!").await?;
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    inner: Arc<RegistrationClientInner>,
}

#[derive(Debug)]
struct RegistrationClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl RegistrationClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> RegistrationClientBuilder<Missing> {
        RegistrationClientBuilder::new()
    }

    /// Registers a new user with one POST to `{base}/register`.
    ///
    /// Any 2xx status with a decodable JSON body yields the decoded
    /// [`RegisterResponse`], including `success: false` bodies —
    /// interpretation is the caller's. Non-2xx statuses, transport failures,
    /// and undecodable bodies map to the corresponding [`RegisterError`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        let url = format!("{}/register", self.inner.base_url.trim_end_matches('/'));
        Url::parse(&url).map_err(|_| RegisterError::InvalidEndpoint(url.clone()))?;

        let payload = RegisterRequest { email, password };
        let mut request = self.inner.http_client.post(&url).json(&payload);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        log::debug!("POST {url}");
        let response = request.send().await?;
        let status = response.status();
        log::debug!("registration response: HTTP {status}");

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|err| RegisterError::decode(err.to_string(), body))
        } else {
            Err(RegisterError::Server {
                status: status.as_u16(),
            })
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

#[async_trait]
impl RegistrationSink for RegistrationClient {
    async fn submit(&self, email: &str, password: &str) -> Result<(), SinkError> {
        let response = self
            .register(email, password)
            .await
            .map_err(SinkError::Register)?;

        if response.success {
            Ok(())
        } else {
            let message = response
                .message
                .unwrap_or_else(|| "Registration rejected by the server.".to_string());
            Err(SinkError::Register(RegisterError::Other(message)))
        }
    }
}

/// Request body for the registration call.
#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Decoded body of a successful registration response.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    /// Whether the server accepted the registration.
    pub success: bool,
    /// Optional server-provided message.
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`RegistrationClient`].
///
/// Uses the typestate pattern so the endpoint URL must be set before `build`
/// is available.
///
/// # Example
///
/// ```ignore
/// let client = RegistrationClient::builder()
///     .url("https://example.com/api")
///     .timeout(Duration::from_secs(10))
///     .build();
/// ```
pub struct RegistrationClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl RegistrationClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the registration endpoint base URL.
    ///
    /// The `register` path segment is appended per call.
    pub fn url(self, url: impl Into<String>) -> RegistrationClientBuilder<Set<String>> {
        RegistrationClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for RegistrationClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> RegistrationClientBuilder<U> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client is created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl RegistrationClientBuilder<Set<String>> {
    /// Builds the [`RegistrationClient`].
    ///
    /// Only available once `url` has been set.
    pub fn build(self) -> RegistrationClient {
        RegistrationClient {
            inner: Arc::new(RegistrationClientInner {
                base_url: self.url.0,
                http_client: self.http_client.unwrap_or_default(),
                timeout: self.timeout,
            }),
        }
    }
}
