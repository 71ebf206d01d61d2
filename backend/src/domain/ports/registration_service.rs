//! Driving port for account sign-up.

use async_trait::async_trait;

use crate::domain::{Error, SignUpDetails, SignUpValidationError, UserId};

/// Result of a sign-up attempt with already validated details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The account was created.
    Registered(UserId),
    /// The account could not be created for user-facing reasons.
    Rejected(Vec<SignUpValidationError>),
}

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account for `details`.
    async fn register(&self, details: &SignUpDetails) -> Result<RegistrationOutcome, Error>;
}
