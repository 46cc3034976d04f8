//! Model Client Port - Interface for generative model completions.
//!
//! The analysis pipeline needs exactly one capability from a model
//! backend: turn a prompt string into a completion string. Everything
//! transport-specific (endpoints, auth, pooling, timeouts, cancellation)
//! belongs to the adapter implementing this port.
//!
//! # Example
//!
//! ```ignore
//! struct EchoClient;
//!
//! #[async_trait]
//! impl ModelClient for EchoClient {
//!     async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
//!         Ok(prompt.to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Port for generative model completions.
///
/// Implementations connect to an external model service and translate its
/// failures into [`ModelError`]. Implementations must be shareable across
/// concurrent requests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Generates a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on any transport failure: the service is
    /// unreachable, replies with a non-success status, or returns an
    /// envelope the adapter cannot read a completion from.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Transport-level failures from a model client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Network error during the request.
    #[error("model request failed: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("model request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The model service replied with a non-success status.
    #[error("model API returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// API key or authentication failed.
    #[error("authentication with the model API failed")]
    AuthenticationFailed,

    /// The response envelope did not contain a completion.
    #[error("unexpected model response format: {0}")]
    MalformedResponse(String),
}

impl ModelError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a non-success status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
