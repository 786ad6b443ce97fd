use crate::auth::error::AuthError;
use crate::validation::Credentials;

pub mod error;
pub mod simulated;
pub use simulated::SimulatedAuthenticator;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Remote credential check used by the login view-model.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `Ok(true)` when the credentials are accepted, `Ok(false)` when
    /// they are rejected, and `Err` when the check itself failed.
    async fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError>;
}
