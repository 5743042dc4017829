//! Error types for the bed client

use thiserror::Error;

/// Message shown when the service gave no usable explanation
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure talking to the remote bed service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Non-2xx response carrying an `{ "error": ... }` body
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    /// Non-2xx response without a readable error body
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Server-provided message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } | ServiceError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

/// Loading the bed list failed; the previous snapshot stays in place
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to fetch beds: {0}")]
pub struct FetchError(#[from] pub ServiceError);

impl FetchError {
    pub fn user_message(&self) -> String {
        self.0.user_message("Failed to load beds")
    }
}

/// Field errors for the assign form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignValidation {
    pub name: Option<&'static str>,
    pub urgency: Option<&'static str>,
}

impl AssignValidation {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.urgency.is_none()
    }
}

impl std::fmt::Display for AssignValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.name.iter().chain(self.urgency.iter()).copied().collect();
        f.write_str(&messages.join("; "))
    }
}

/// A lifecycle transition could not be performed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// Rejected client-side, nothing was sent
    #[error("Invalid input: {0}")]
    Invalid(AssignValidation),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl TransitionError {
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            TransitionError::Invalid(validation) => validation.to_string(),
            TransitionError::Service(err) => err.user_message(fallback),
        }
    }
}
