//! Driving port for reading restaurants.

use async_trait::async_trait;

use crate::domain::{Error, Restaurant, RestaurantId};

/// Read-side restaurant use-cases. No authentication is required.
#[async_trait]
pub trait RestaurantsQuery: Send + Sync {
    /// Every restaurant, in store order.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, Error>;

    /// A single restaurant, or a `not_found` error.
    async fn find_restaurant(&self, id: RestaurantId) -> Result<Restaurant, Error>;
}
