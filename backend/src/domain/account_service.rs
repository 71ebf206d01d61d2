//! Account domain service backing sign-in and sign-up.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, LoginService, RegistrationOutcome,
    RegistrationService,
};
use crate::domain::{
    Account, EmailAddress, Error, LoginCredentials, PasswordDigest, SignUpDetails,
    SignUpValidationError, UserId,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

fn map_repository_error(error: AccountRepositoryError) -> Error {
    match error {
        AccountRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("account repository unavailable: {message}"))
        }
        AccountRepositoryError::Query { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
        AccountRepositoryError::DuplicateEmail { email } => {
            Error::conflict(format!("account already exists for {email}"))
        }
    }
}

/// Account service implementing [`LoginService`] and [`RegistrationService`].
#[derive(Clone)]
pub struct AccountService<R> {
    account_repo: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(account_repo: Arc<R>) -> Self {
        Self { account_repo }
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Ok(email) = EmailAddress::new(credentials.email()) else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let account = self
            .account_repo
            .find_by_email(&email)
            .await
            .map_err(map_repository_error)?;

        match account {
            Some(account) if account.password().matches(credentials.password()) => {
                debug!(user_id = %account.id(), "credentials accepted");
                Ok(account.id().clone())
            }
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS)),
        }
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, details: &SignUpDetails) -> Result<RegistrationOutcome, Error> {
        let existing = self
            .account_repo
            .find_by_email(details.email())
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Ok(RegistrationOutcome::Rejected(vec![
                SignUpValidationError::EmailTaken,
            ]));
        }

        let account = Account::new(
            UserId::random(),
            details.email().clone(),
            PasswordDigest::derive(details.password())?,
        );

        match self.account_repo.insert(&account).await {
            Ok(()) => {
                info!(user_id = %account.id(), "account registered");
                Ok(RegistrationOutcome::Registered(account.id().clone()))
            }
            // Lost a race with a concurrent sign-up for the same email.
            Err(AccountRepositoryError::DuplicateEmail { .. }) => Ok(
                RegistrationOutcome::Rejected(vec![SignUpValidationError::EmailTaken]),
            ),
            Err(error) => Err(map_repository_error(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for account sign-in and sign-up.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockAccountRepository;
    use rstest::rstest;

    fn account(email: &str, password: &str) -> Account {
        Account::new(
            UserId::random(),
            EmailAddress::new(email).expect("fixture email"),
            PasswordDigest::derive(password).expect("fixture hash"),
        )
    }

    fn service(repo: MockAccountRepository) -> AccountService<MockAccountRepository> {
        AccountService::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn authenticate_accepts_matching_password() {
        let stored = account("name@name.com", "12345678");
        let expected = stored.id().clone();
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email.as_ref() == "name@name.com")
            .return_once(move |_| Ok(Some(stored)));

        let creds = LoginCredentials::try_from_parts("Name@Name.com", "12345678").expect("creds");
        let user_id = service(repo).authenticate(&creds).await.expect("authenticated");
        assert_eq!(user_id, expected);
    }

    #[rstest]
    #[case("name@name.com", "wrong-password", true)]
    #[case("ghost@name.com", "12345678", false)]
    #[case("not-an-email", "12345678", false)]
    #[tokio::test]
    async fn authenticate_rejects_bad_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] known: bool,
    ) {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email().returning(move |_| {
            Ok(known.then(|| account("name@name.com", "12345678")))
        });

        let creds = LoginCredentials::try_from_parts(email, password).expect("creds");
        let error = service(repo).authenticate(&creds).await.expect_err("rejected");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
        assert_eq!(error.message(), INVALID_CREDENTIALS);
    }

    #[rstest]
    #[tokio::test]
    async fn register_stores_hashed_password() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email().return_once(|_| Ok(None));
        repo.expect_insert()
            .withf(|account| {
                account.email().as_ref() == "bob@name.com"
                    && account.password().matches("12345678")
                    && account.password().as_str().starts_with("$argon2id$")
            })
            .times(1)
            .return_once(|_| Ok(()));

        let details =
            SignUpDetails::try_from_parts("bob@name.com", "12345678", "12345678").expect("valid");
        let outcome = service(repo).register(&details).await.expect("registered");
        assert!(matches!(outcome, RegistrationOutcome::Registered(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .return_once(|_| Ok(Some(account("bob@name.com", "whatever"))));
        repo.expect_insert().never();

        let details =
            SignUpDetails::try_from_parts("bob@name.com", "12345678", "12345678").expect("valid");
        let outcome = service(repo).register(&details).await.expect("handled");
        assert_eq!(
            outcome,
            RegistrationOutcome::Rejected(vec![SignUpValidationError::EmailTaken])
        );
    }

    #[rstest]
    #[tokio::test]
    async fn register_treats_insert_race_as_taken() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email().return_once(|_| Ok(None));
        repo.expect_insert()
            .return_once(|_| Err(AccountRepositoryError::duplicate_email("bob@name.com")));

        let details =
            SignUpDetails::try_from_parts("bob@name.com", "12345678", "12345678").expect("valid");
        let outcome = service(repo).register(&details).await.expect("handled");
        assert_eq!(
            outcome,
            RegistrationOutcome::Rejected(vec![SignUpValidationError::EmailTaken])
        );
    }

    #[rstest]
    #[tokio::test]
    async fn register_maps_connection_failures() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .return_once(|_| Err(AccountRepositoryError::connection("refused")));

        let details =
            SignUpDetails::try_from_parts("bob@name.com", "12345678", "12345678").expect("valid");
        let error = service(repo).register(&details).await.expect_err("unavailable");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
