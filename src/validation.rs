//! Client-side field validation for the login form.

use crate::consts::cli_consts::MIN_PASSWORD_LEN;
use std::fmt;
use thiserror::Error;

/// Username and password for a single submit attempt. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// Checks the raw form input, reporting the first failing rule.
///
/// Rules apply in order: username present, password present, password at
/// least [`MIN_PASSWORD_LEN`] characters. Whitespace-only counts as empty.
pub fn validate(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.trim().is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(Credentials::new(username, password))
}
