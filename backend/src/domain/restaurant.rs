//! Restaurant entity and its value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Minimum number of characters a restaurant name must contain.
pub const RESTAURANT_NAME_MIN: usize = 3;

/// Validation errors raised by restaurant value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantValidationError {
    /// The name is shorter than [`RESTAURANT_NAME_MIN`] once trimmed.
    NameTooShort,
    /// The id is not a positive integer.
    InvalidId,
}

impl fmt::Display for RestaurantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(
                f,
                "Name is too short (minimum is {RESTAURANT_NAME_MIN} characters)"
            ),
            Self::InvalidId => write!(f, "restaurant id must be a positive integer"),
        }
    }
}

impl std::error::Error for RestaurantValidationError {}

/// Store-assigned restaurant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Wrap a raw id, rejecting zero and negative values.
    pub fn new(raw: i64) -> Result<Self, RestaurantValidationError> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(RestaurantValidationError::InvalidId)
        }
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RestaurantId {
    type Err = RestaurantValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| RestaurantValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl TryFrom<i64> for RestaurantId {
    type Error = RestaurantValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RestaurantId> for i64 {
    fn from(value: RestaurantId) -> Self {
        value.0
    }
}

/// Validated restaurant name.
///
/// ## Invariants
/// - Trimmed of leading and trailing whitespace.
/// - At least [`RESTAURANT_NAME_MIN`] characters long.
///
/// # Examples
/// ```
/// use yelp::domain::RestaurantName;
///
/// assert_eq!(RestaurantName::new("  KFC ").unwrap().as_ref(), "KFC");
/// assert!(RestaurantName::new("kf").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RestaurantName(String);

impl RestaurantName {
    /// Validate and construct a name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, RestaurantValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.chars().count() < RESTAURANT_NAME_MIN {
            return Err(RestaurantValidationError::NameTooShort);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for RestaurantName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RestaurantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RestaurantName> for String {
    fn from(value: RestaurantName) -> Self {
        value.0
    }
}

impl TryFrom<String> for RestaurantName {
    type Error = RestaurantValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A persisted restaurant.
///
/// `id` and `owner_id` never change after creation; only the name can be
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    id: RestaurantId,
    name: RestaurantName,
    owner_id: UserId,
}

impl Restaurant {
    /// Assemble a restaurant from validated parts.
    pub fn new(id: RestaurantId, name: RestaurantName, owner_id: UserId) -> Self {
        Self { id, name, owner_id }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> RestaurantId {
        self.id
    }

    /// Current name.
    pub fn name(&self) -> &RestaurantName {
        &self.name
    }

    /// User that created the record.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Whether `user` created this record.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }

    /// Return a copy carrying `name`, keeping id and owner.
    #[must_use]
    pub fn renamed(&self, name: RestaurantName) -> Self {
        Self {
            id: self.id,
            name,
            owner_id: self.owner_id.clone(),
        }
    }
}

/// Attributes of a restaurant that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    /// Validated name.
    pub name: RestaurantName,
    /// Creating user.
    pub owner_id: UserId,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for restaurant value objects.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("kf")]
    #[case("  kf  ")]
    #[case("   ")]
    fn short_names_are_rejected(#[case] raw: &str) {
        assert_eq!(
            RestaurantName::new(raw).expect_err("too short"),
            RestaurantValidationError::NameTooShort
        );
    }

    #[rstest]
    #[case("KFC", "KFC")]
    #[case(" Kentucky Fried Chicken ", "Kentucky Fried Chicken")]
    #[case("Café", "Café")]
    fn valid_names_are_trimmed(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(RestaurantName::new(raw).expect("valid").as_ref(), expected);
    }

    #[rstest]
    fn name_length_counts_characters_not_bytes() {
        assert!(RestaurantName::new("éé").is_err());
        assert!(RestaurantName::new("ééé").is_ok());
    }

    #[rstest]
    fn error_message_matches_form_copy() {
        assert_eq!(
            RestaurantValidationError::NameTooShort.to_string(),
            "Name is too short (minimum is 3 characters)"
        );
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("42", Some(42))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    fn ids_parse_from_path_segments(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(raw.parse::<RestaurantId>().ok().map(RestaurantId::get), expected);
    }

    #[rstest]
    fn ownership_compares_user_ids() {
        let owner = UserId::random();
        let restaurant = Restaurant::new(
            RestaurantId::new(1).expect("valid id"),
            RestaurantName::new("KFC").expect("valid name"),
            owner.clone(),
        );
        assert!(restaurant.is_owned_by(&owner));
        assert!(!restaurant.is_owned_by(&UserId::random()));
    }

    #[rstest]
    fn renamed_keeps_identity() {
        let owner = UserId::random();
        let restaurant = Restaurant::new(
            RestaurantId::new(5).expect("valid id"),
            RestaurantName::new("KFC").expect("valid name"),
            owner.clone(),
        );
        let renamed =
            restaurant.renamed(RestaurantName::new("Kentucky Fried Chicken").expect("valid"));
        assert_eq!(renamed.id(), restaurant.id());
        assert_eq!(renamed.owner_id(), &owner);
        assert_eq!(renamed.name().as_ref(), "Kentucky Fried Chicken");
    }
}
