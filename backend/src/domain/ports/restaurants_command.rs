//! Driving port for restaurant mutations.
//!
//! Validation failures and ownership refusals are ordinary outcomes, not
//! errors: the caller re-renders a form or attaches a notice. Only missing
//! records and persistence failures travel as [`Error`].

use async_trait::async_trait;

use crate::domain::{Error, Restaurant, RestaurantId, UserId};

/// Request to create a restaurant owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRestaurantRequest {
    /// Raw name as submitted.
    pub name: String,
    /// Authenticated caller, recorded as owner.
    pub owner_id: UserId,
}

/// Request to rename a restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRestaurantRequest {
    /// Restaurant to rename.
    pub id: RestaurantId,
    /// Raw name as submitted.
    pub name: String,
}

/// Request to delete a restaurant on behalf of a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyRestaurantRequest {
    /// Restaurant to delete.
    pub id: RestaurantId,
    /// Authenticated caller, compared against the owner.
    pub caller: UserId,
}

/// A submission that failed validation, kept for redisplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRejection {
    /// The name exactly as submitted.
    pub attempted_name: String,
    /// User-facing validation messages.
    pub errors: Vec<String>,
}

/// Result of a create attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRestaurantOutcome {
    /// The restaurant was stored.
    Created(Restaurant),
    /// Validation failed; nothing was stored.
    Rejected(RestaurantRejection),
}

/// Result of an update attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateRestaurantOutcome {
    /// The new name was stored.
    Updated(Restaurant),
    /// Validation failed; `current` is the unchanged record.
    Rejected {
        /// Stored record, untouched.
        current: Restaurant,
        /// Why the submission was refused.
        rejection: RestaurantRejection,
    },
}

/// Result of a delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyRestaurantOutcome {
    /// The caller owned the record and it was removed.
    Deleted(Restaurant),
    /// The caller is not the owner; the record was left in place.
    NotOwner(Restaurant),
}

/// Write-side restaurant use-cases. Callers must already be authenticated.
#[async_trait]
pub trait RestaurantsCommand: Send + Sync {
    /// Validate and store a new restaurant.
    async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> Result<CreateRestaurantOutcome, Error>;

    /// Validate and store a new name. Ownership is not checked.
    async fn update_restaurant(
        &self,
        request: UpdateRestaurantRequest,
    ) -> Result<UpdateRestaurantOutcome, Error>;

    /// Delete a restaurant if the caller owns it.
    async fn destroy_restaurant(
        &self,
        request: DestroyRestaurantRequest,
    ) -> Result<DestroyRestaurantOutcome, Error>;
}
