//! Error types for the login-redirect crate

use thiserror::Error;

/// Errors that can occur while deciding where to send an authenticated user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectError {
    /// The principal carries no authority recognized by the redirect policy
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl RedirectError {
    /// Log the error and return self
    ///
    /// Lets callers log at the point where they decide how to surface the error,
    /// e.g. `resolve_redirect(..).map_err(RedirectError::log)`.
    pub fn log(self) -> Self {
        match &self {
            Self::InvalidState(message) => tracing::error!("Invalid state: {}", message),
        }
        self
    }
}
