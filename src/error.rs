//! Client Errors

use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is what the user gets to see.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Required input missing or malformed; caught before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task description.")]
    EmptyTaskName,
    #[error("Task description cannot be empty.")]
    EmptyEditedTaskName,
    #[error("Please enter a category title.")]
    EmptyCategoryTitle,
    #[error("Please fill in all fields.")]
    MissingCredentials,
    #[error("Invalid deadline.")]
    InvalidDeadline,
}
