//! Driven port for account persistence.

use async_trait::async_trait;

use crate::domain::{Account, EmailAddress};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// Another account already uses the email address.
        DuplicateEmail { email: String } =>
            "account already exists for {email}",
    }
}

/// Storage for registered accounts keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up an account by normalised email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountRepositoryError>;

    /// Store a new account. Fails with `DuplicateEmail` if the email is taken.
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError>;
}
