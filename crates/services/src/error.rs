//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the prediction client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictionError {
    /// The backend answered with a non-2xx status. `message` carries the
    /// server-provided error text when the body parsed, else a generic
    /// fallback.
    #[error("prediction request failed with status {status}: {message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl PredictionError {
    /// The single user-visible string the UI shows for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Server { message, .. } => message.clone(),
            PredictionError::Http(_) => {
                "Failed to connect to the server. Please check the network and server status."
                    .to_string()
            }
        }
    }
}
