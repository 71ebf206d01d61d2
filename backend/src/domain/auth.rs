//! Authentication primitives: sign-in credentials and sign-up details.
//!
//! Inbound adapters turn raw form values into these types before talking to
//! the account ports, so the domain only ever sees validated input.

use std::fmt;

use zeroize::Zeroizing;

use super::{EmailAddress, UserValidationError};

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN: usize = 6;
/// Maximum accepted password length, in characters.
pub const PASSWORD_MAX: usize = 128;

/// Errors raised when sign-in payload values are unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Credentials submitted to the sign-in form.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased and non-empty. It is not checked for
///   shape; unknown addresses simply fail to authenticate.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use yelp::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Name@Name.com", "12345678").unwrap();
/// assert_eq!(creds.email(), "name@name.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalised = email.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalised,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// A single reason a sign-up attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpValidationError {
    /// The email address was blank or malformed.
    Email(UserValidationError),
    /// The email address belongs to an existing account.
    EmailTaken,
    /// The password is shorter than [`PASSWORD_MIN`].
    PasswordTooShort,
    /// The password is longer than [`PASSWORD_MAX`].
    PasswordTooLong,
    /// The confirmation differs from the password.
    ConfirmationMismatch,
}

impl fmt::Display for SignUpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(error) => write!(f, "{error}"),
            Self::EmailTaken => write!(f, "Email has already been taken"),
            Self::PasswordTooShort => write!(
                f,
                "Password is too short (minimum is {PASSWORD_MIN} characters)"
            ),
            Self::PasswordTooLong => write!(
                f,
                "Password is too long (maximum is {PASSWORD_MAX} characters)"
            ),
            Self::ConfirmationMismatch => {
                write!(f, "Password confirmation doesn't match Password")
            }
        }
    }
}

impl std::error::Error for SignUpValidationError {}

/// Validated sign-up details.
///
/// Validation collects every failing rule so the form can list them all.
///
/// # Examples
/// ```
/// use yelp::domain::SignUpDetails;
///
/// let details = SignUpDetails::try_from_parts("bob@name.com", "12345678", "12345678").unwrap();
/// assert_eq!(details.email().as_ref(), "bob@name.com");
///
/// let errors = SignUpDetails::try_from_parts("bob", "123", "456").unwrap_err();
/// assert_eq!(errors.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpDetails {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl SignUpDetails {
    /// Validate raw sign-up form values.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Self, Vec<SignUpValidationError>> {
        let mut errors = Vec::new();

        let email = EmailAddress::new(email)
            .map_err(|error| errors.push(SignUpValidationError::Email(error)))
            .ok();

        let length = password.chars().count();
        if length < PASSWORD_MIN {
            errors.push(SignUpValidationError::PasswordTooShort);
        } else if length > PASSWORD_MAX {
            errors.push(SignUpValidationError::PasswordTooLong);
        }
        if password != password_confirmation {
            errors.push(SignUpValidationError::ConfirmationMismatch);
        }

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                email,
                password: Zeroizing::new(password.to_owned()),
            }),
            _ => Err(errors),
        }
    }

    /// Normalised email address for the new account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plain-text password; hash it before persisting.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("name@name.com", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn credentials_keep_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("name@name.com", " pw ").expect("valid");
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    #[case("12345", "12345", vec![SignUpValidationError::PasswordTooShort])]
    #[case("12345678", "87654321", vec![SignUpValidationError::ConfirmationMismatch])]
    #[case(
        "123",
        "12",
        vec![
            SignUpValidationError::PasswordTooShort,
            SignUpValidationError::ConfirmationMismatch,
        ]
    )]
    fn sign_up_collects_password_errors(
        #[case] password: &str,
        #[case] confirmation: &str,
        #[case] expected: Vec<SignUpValidationError>,
    ) {
        let errors = SignUpDetails::try_from_parts("name@name.com", password, confirmation)
            .expect_err("invalid sign up");
        assert_eq!(errors, expected);
    }

    #[rstest]
    fn sign_up_rejects_long_passwords() {
        let password = "x".repeat(PASSWORD_MAX + 1);
        let errors = SignUpDetails::try_from_parts("name@name.com", &password, &password)
            .expect_err("too long");
        assert_eq!(errors, vec![SignUpValidationError::PasswordTooLong]);
    }

    #[rstest]
    fn sign_up_reports_invalid_email_first() {
        let errors =
            SignUpDetails::try_from_parts("nope", "12345678", "12345678").expect_err("bad email");
        assert_eq!(
            errors,
            vec![SignUpValidationError::Email(UserValidationError::InvalidEmail)]
        );
        assert_eq!(errors[0].to_string(), "Email is invalid");
    }
}
