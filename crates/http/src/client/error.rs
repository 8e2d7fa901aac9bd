//! Errors surfaced by the backoffice API clients

use thiserror::Error;

/// Why a call to the backoffice API did not produce a response body
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached, or did not answer in time
    #[error("Could not reach the backoffice API: {0}")]
    Request(#[from] reqwest::Error),

    /// 5xx, or any other status without a more specific meaning
    #[error("Backoffice API answered {status}: {message}")]
    ServerError { status: u16, message: String },

    /// 401 from an endpoint; the token (or credentials) were not accepted
    #[error("Not signed in: {0}")]
    AuthenticationFailed(String),

    #[error("Not allowed: {0}")]
    Forbidden(String),

    /// 4xx whose body explains what to fix (unknown email, taken address)
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 2xx whose body is not the expected JSON
    #[error("Unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Missing base URL or token at client construction
    #[error("Client misconfigured: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Classify a non-success status with the message extracted from its body
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            code @ 400..=499 => Self::Rejected {
                status: code,
                message,
            },
            code => Self::ServerError {
                status: code,
                message,
            },
        }
    }

    /// The session token was rejected and the user must sign in again
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Text for the inline error banner of a form or page
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) if e.is_timeout() => {
                "The server took too long to respond. Please try again.".to_string()
            }
            Self::Request(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::AuthenticationFailed(_) => "Your session has expired. Please sign in again.".to_string(),
            Self::Forbidden(_) => "You don't have permission to do that.".to_string(),
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => "The request could not be completed.".to_string(),
            Self::ServerError { .. } | Self::InvalidResponse(_) => {
                "Something went wrong on our side. Please try again later.".to_string()
            }
            Self::Configuration(message) => message.clone(),
        }
    }
}
