//! PostgreSQL-backed `AccountRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, EmailAddress, PasswordDigest, UserId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the account repository port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let AccountRow {
        id,
        email,
        password_hash,
    } = row;
    let email = EmailAddress::new(email)
        .map_err(|err| AccountRepositoryError::query(format!("account {id} email: {err}")))?;
    Ok(Account::new(
        UserId::from_uuid(id),
        email,
        PasswordDigest::from_phc(password_hash),
    ))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(AccountRow::as_select())
            .first::<AccountRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewAccountRow {
            id: *account.id().as_uuid(),
            email: account.email().as_ref(),
            password_hash: account.password().as_str(),
        };

        match diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(error) if is_unique_violation(&error) => Err(
                AccountRepositoryError::duplicate_email(account.email().as_ref()),
            ),
            Err(error) => Err(map_diesel_error(error)),
        }
    }
}
