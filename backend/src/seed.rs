//! Start-up registration of the demo accounts.

use tracing::{info, warn};

use crate::domain::ports::{RegistrationOutcome, RegistrationService};
use crate::domain::{Error, SignUpDetails};

/// Accounts registered when demo seeding is enabled.
pub const DEMO_ACCOUNTS: [&str; 2] = ["name@name.com", "bob@name.com"];
/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "12345678";

/// Errors returned while seeding demo accounts.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A fixed demo account failed sign-up validation.
    #[error("demo account {email} is invalid: {reason}")]
    InvalidAccount {
        /// Address that failed validation.
        email: String,
        /// Validation failures joined for display.
        reason: String,
    },
    /// The account store rejected the write.
    #[error("demo account registration failed: {0}")]
    Registration(#[from] Error),
}

/// Register the demo accounts when `enabled`.
///
/// Accounts that already exist are left untouched, so restarting against a
/// persistent store is harmless. Returns how many accounts were created.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use yelp::domain::AccountService;
/// use yelp::outbound::memory::InMemoryAccountRepository;
/// use yelp::seed::seed_demo_accounts;
///
/// # async fn run() -> Result<(), yelp::seed::SeedError> {
/// let accounts = AccountService::new(Arc::new(InMemoryAccountRepository::new()));
/// assert_eq!(seed_demo_accounts(true, &accounts).await?, 2);
/// assert_eq!(seed_demo_accounts(true, &accounts).await?, 0);
/// # Ok(())
/// # }
/// ```
pub async fn seed_demo_accounts(
    enabled: bool,
    registration: &dyn RegistrationService,
) -> Result<usize, SeedError> {
    if !enabled {
        info!(reason = "disabled", "demo account seeding skipped");
        return Ok(0);
    }

    let mut created = 0;
    for email in DEMO_ACCOUNTS {
        let details = SignUpDetails::try_from_parts(email, DEMO_PASSWORD, DEMO_PASSWORD)
            .map_err(|errors| SeedError::InvalidAccount {
                email: email.to_owned(),
                reason: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        match registration.register(&details).await? {
            RegistrationOutcome::Registered(user_id) => {
                info!(%email, %user_id, "demo account registered");
                created += 1;
            }
            RegistrationOutcome::Rejected(reasons) => {
                warn!(%email, count = reasons.len(), "demo account already present; skipping");
            }
        }
    }
    Ok(created)
}
