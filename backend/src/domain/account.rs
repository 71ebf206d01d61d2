//! Registered accounts and their password hashes.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use uuid::Uuid;

use super::{EmailAddress, Error, UserId};

/// Argon2id hash of an account password in PHC string form.
///
/// The salt is embedded in the string, so the value is self-describing and
/// verification needs nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Hash `password` under a freshly generated salt.
    ///
    /// # Errors
    /// Returns an internal error if the hasher rejects its inputs.
    ///
    /// # Examples
    /// ```
    /// use yelp::domain::PasswordDigest;
    ///
    /// let digest = PasswordDigest::derive("12345678").expect("hashes");
    /// assert!(digest.as_str().starts_with("$argon2id$"));
    /// assert!(digest.matches("12345678"));
    /// assert!(!digest.matches("87654321"));
    /// ```
    pub fn derive(password: &str) -> Result<Self, Error> {
        let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
            .map_err(|err| Error::internal(format!("password salt: {err}")))?;
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?
            .to_string();
        Ok(Self { phc })
    }

    /// Rebuild a hash loaded from storage.
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self { phc: phc.into() }
    }

    /// Whether `password` verifies against the stored hash.
    ///
    /// A stored value that does not parse as a PHC string never matches.
    pub fn matches(&self, password: &str) -> bool {
        PasswordHash::new(&self.phc).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }

    /// PHC string as persisted.
    pub fn as_str(&self) -> &str {
        self.phc.as_str()
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: UserId,
    email: EmailAddress,
    password: PasswordDigest,
}

impl Account {
    /// Assemble an account from validated parts.
    pub fn new(id: UserId, email: EmailAddress, password: PasswordDigest) -> Self {
        Self {
            id,
            email,
            password,
        }
    }

    /// Stable user identifier recorded as restaurant owner.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Sign-in email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password digest.
    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }
}
