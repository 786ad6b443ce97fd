//! Stand-in authenticator: waits a fixed delay, then accepts everything.

use super::Authenticator;
use crate::auth::error::AuthError;
use crate::consts::cli_consts::simulated_auth;
use crate::validation::Credentials;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn accepts(&self, _credentials: &Credentials) -> bool {
        true
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(simulated_auth::default_delay())
    }
}

#[async_trait::async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        log::debug!(
            "Simulating authentication for {} ({:?})",
            credentials.username,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(self.accepts(credentials))
    }
}
