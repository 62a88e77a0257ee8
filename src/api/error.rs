//! API Errors
//!
//! Every failed call is either a transport failure (no usable response)
//! or a server failure (non-2xx with the backend's message).

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network unreachable, request blocked, or an unreadable 2xx body
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Backend error body: `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build a server error from a non-2xx response
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error.trim().to_string(),
            _ if !body.trim().is_empty() && !body.trim_start().starts_with('{') => body.trim().to_string(),
            _ => reason
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status)),
        };
        ApiError::Server { status, message }
    }

    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Server { status, .. } => Some(*status),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
