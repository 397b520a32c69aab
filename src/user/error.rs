//! Error types for user resources.

use crate::session::{Method, SessionError};
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The id could not be read as an integer.
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    /// A remote operation was invoked on a user built without a session.
    #[error("User has no session")]
    NoSession,

    /// A remote operation needs the user's id, but none was given.
    #[error("User has no id")]
    MissingId,

    /// The response did not have the shape the method returns.
    #[error("Unexpected response from {method}: {reason}")]
    UnexpectedResponse { method: Method, reason: String },

    /// A record could not be converted into its typed form.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The session failed; passed through untouched.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<serde_json::Error> for UserError {
    fn from(e: serde_json::Error) -> Self {
        UserError::Decode(e.to_string())
    }
}
