//! API Errors
//!
//! One error type for every request the front end makes.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Field name -> server messages, as sent with a 422 response
pub type ServerFieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,

    #[error("not allowed: {0}")]
    Forbidden(String),

    #[error("resource not found")]
    NotFound,

    #[error("{message}")]
    Validation { message: String, errors: ServerFieldErrors },

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<ServerFieldErrors>,
}

impl ApiError {
    /// Map a non-success HTTP response to an error
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty());

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message.unwrap_or_else(|| "This action is unauthorized.".to_string())),
            404 => ApiError::NotFound,
            422 => ApiError::Validation {
                message: message.unwrap_or_else(|| "The given data was invalid.".to_string()),
                errors: parsed.errors.unwrap_or_default(),
            },
            _ => ApiError::Status {
                status,
                message: message.unwrap_or_else(|| default_status_message(status).to_string()),
            },
        }
    }

    /// Wrap a rejected browser promise or missing browser API
    pub fn browser(context: &str, value: impl std::fmt::Debug) -> Self {
        ApiError::Browser(format!("{}: {:?}", context, value))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Every message a 422 carried, field messages first in field order
    pub fn validation_messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation { message, errors } if errors.is_empty() => vec![message.clone()],
            ApiError::Validation { errors, .. } => errors.values().flatten().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Short text suitable for a banner or field hint
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Forbidden(message) => message.clone(),
            ApiError::NotFound => "The requested resource does not exist.".to_string(),
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Browser(_) => "The browser rejected the operation.".to_string(),
        }
    }
}

fn default_status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        409 => "Conflict",
        429 => "Too many requests",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}
