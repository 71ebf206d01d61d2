//! Driven port for restaurant persistence.

use async_trait::async_trait;

use crate::domain::{NewRestaurant, Restaurant, RestaurantId, RestaurantName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by restaurant repository adapters.
    pub enum RestaurantRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "restaurant repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "restaurant repository query failed: {message}",
    }
}

/// Storage for restaurant records.
///
/// Adapters assign ids on insert. Lookups and mutations report a missing
/// record with `None`/`false` rather than an error so services decide how to
/// surface it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// All restaurants ordered by ascending id.
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Persist a new restaurant and return it with its assigned id.
    async fn insert(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<Restaurant, RestaurantRepositoryError>;

    /// Load a restaurant by id.
    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError>;

    /// Replace the name of an existing restaurant.
    async fn update_name(
        &self,
        id: RestaurantId,
        name: &RestaurantName,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError>;

    /// Remove a restaurant, returning whether a row was deleted.
    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantRepositoryError>;
}
