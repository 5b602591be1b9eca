//! API client error types

use thiserror::Error;

/// Shown when the request never produced a usable response
pub const GENERIC_TRANSPORT_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

/// Errors that can occur when talking to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Network failure (DNS, refused connection, dropped socket)
    #[error("Network error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response, with the backend's message when the body carried one
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    /// Body did not match the expected envelope
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Request build error: {0}")]
    Request(String),
}

impl ClientError {
    /// Message for the user-facing notification.
    ///
    /// The backend's own message is passed through verbatim when present.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Status {
                status,
                message: None,
            } => format!("Request failed with status code {}", status),
            ClientError::Transport(_) | ClientError::Timeout => {
                GENERIC_TRANSPORT_MESSAGE.to_string()
            }
            ClientError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ClientError::Request(e) => format!("Could not send the request: {}", e),
        }
    }

    /// Status code for non-2xx failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_builder() {
            ClientError::Request(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Result type for API client operations
pub type ClientResult<T> = Result<T, ClientError>;
