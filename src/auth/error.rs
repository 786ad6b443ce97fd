//! Error handling for the auth module

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authentication call did not complete.
    #[error("{0}")]
    Failed(String),
}

impl AuthError {
    /// Builds an [`AuthError::Failed`] from a panic payload.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "authentication task panicked".to_string()
        };
        AuthError::Failed(message)
    }
}
