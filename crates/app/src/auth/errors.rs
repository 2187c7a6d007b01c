//! Auth service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to access session file")]
    Io(#[from] io::Error),

    #[error("failed to encode session")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("session storage error")]
    Session(#[source] SessionError),
}

impl From<SessionError> for AuthServiceError {
    fn from(error: SessionError) -> Self {
        Self::Session(error)
    }
}
