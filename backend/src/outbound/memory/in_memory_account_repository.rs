//! `AccountRepository` backed by a locked `HashMap` keyed by email.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, EmailAddress};

/// In-memory account store.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<EmailAddress, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<EmailAddress, Account>>, AccountRepositoryError> {
        self.accounts
            .lock()
            .map_err(|_| AccountRepositoryError::query("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.lock()?;
        match accounts.entry(account.email().clone()) {
            Entry::Occupied(_) => Err(AccountRepositoryError::duplicate_email(
                account.email().as_ref(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordDigest, UserId};
    use rstest::rstest;

    fn account(email: &str) -> Account {
        Account::new(
            UserId::random(),
            EmailAddress::new(email).expect("fixture email"),
            PasswordDigest::derive("12345678").expect("fixture hash"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn stores_and_finds_by_email() {
        let repo = InMemoryAccountRepository::new();
        let stored = account("name@name.com");
        repo.insert(&stored).await.expect("insert");

        let found = repo
            .find_by_email(stored.email())
            .await
            .expect("lookup");
        assert_eq!(found, Some(stored));
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(&account("bob@name.com")).await.expect("first insert");

        let err = repo
            .insert(&account("bob@name.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, AccountRepositoryError::duplicate_email("bob@name.com"));
    }
}
