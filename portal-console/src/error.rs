//! Console error types

use portal_client::ClientError;
use thiserror::Error;

/// Fallback shown when the backend gave no usable message
pub const GENERIC_REMOTE_ERROR: &str = "Something went wrong. Please try again.";

/// Console error type
///
/// Everything here is recoverable by user retry; nothing is fatal and no
/// automatic retry is attempted.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Local validation failure; no remote call was made
    #[error("{0}")]
    Validation(String),

    /// Remote call failure
    #[error("Remote call failed: {0}")]
    Remote(#[from] ClientError),
}

impl ConsoleError {
    /// The transient message shown to the user for this error
    ///
    /// Server-provided messages are passed through; transport-level
    /// failures collapse into a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Remote(ClientError::Api { message, .. }) if !message.is_empty() => {
                message.clone()
            }
            Self::Remote(ClientError::Validation(message)) if !message.is_empty() => {
                message.clone()
            }
            Self::Remote(_) => GENERIC_REMOTE_ERROR.to_string(),
        }
    }
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
