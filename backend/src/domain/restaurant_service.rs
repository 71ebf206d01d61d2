//! Restaurant domain service.
//!
//! Implements both restaurant driving ports on top of a
//! [`RestaurantRepository`]. Name validation happens here so every adapter
//! stores only valid names.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateRestaurantOutcome, CreateRestaurantRequest, DestroyRestaurantOutcome,
    DestroyRestaurantRequest, RestaurantRejection, RestaurantRepository,
    RestaurantRepositoryError, RestaurantsCommand, RestaurantsQuery, UpdateRestaurantOutcome,
    UpdateRestaurantRequest,
};
use crate::domain::{
    Error, NewRestaurant, Restaurant, RestaurantId, RestaurantName, RestaurantValidationError,
};

fn map_repository_error(error: RestaurantRepositoryError) -> Error {
    match error {
        RestaurantRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("restaurant repository unavailable: {message}"))
        }
        RestaurantRepositoryError::Query { message } => {
            Error::internal(format!("restaurant repository error: {message}"))
        }
    }
}

fn not_found(id: RestaurantId) -> Error {
    Error::not_found(format!("restaurant {id} not found"))
        .with_details(json!({ "restaurantId": id.get() }))
}

fn rejection(attempted_name: String, error: &RestaurantValidationError) -> RestaurantRejection {
    RestaurantRejection {
        attempted_name,
        errors: vec![error.to_string()],
    }
}

/// Restaurant service implementing [`RestaurantsQuery`] and
/// [`RestaurantsCommand`].
#[derive(Clone)]
pub struct RestaurantService<R> {
    restaurant_repo: Arc<R>,
}

impl<R> RestaurantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(restaurant_repo: Arc<R>) -> Self {
        Self { restaurant_repo }
    }
}

impl<R> RestaurantService<R>
where
    R: RestaurantRepository,
{
    async fn load(&self, id: RestaurantId) -> Result<Restaurant, Error> {
        self.restaurant_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> RestaurantsQuery for RestaurantService<R>
where
    R: RestaurantRepository,
{
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, Error> {
        self.restaurant_repo
            .list()
            .await
            .map_err(map_repository_error)
    }

    async fn find_restaurant(&self, id: RestaurantId) -> Result<Restaurant, Error> {
        self.load(id).await
    }
}

#[async_trait]
impl<R> RestaurantsCommand for RestaurantService<R>
where
    R: RestaurantRepository,
{
    async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> Result<CreateRestaurantOutcome, Error> {
        let CreateRestaurantRequest { name, owner_id } = request;
        let validated = match RestaurantName::new(&name) {
            Ok(validated) => validated,
            Err(error) => {
                debug!(%error, owner_id = %owner_id, "restaurant create rejected");
                return Ok(CreateRestaurantOutcome::Rejected(rejection(name, &error)));
            }
        };

        let restaurant = self
            .restaurant_repo
            .insert(&NewRestaurant {
                name: validated,
                owner_id,
            })
            .await
            .map_err(map_repository_error)?;

        info!(
            restaurant_id = %restaurant.id(),
            owner_id = %restaurant.owner_id(),
            "restaurant created"
        );
        Ok(CreateRestaurantOutcome::Created(restaurant))
    }

    async fn update_restaurant(
        &self,
        request: UpdateRestaurantRequest,
    ) -> Result<UpdateRestaurantOutcome, Error> {
        let UpdateRestaurantRequest { id, name } = request;
        let current = self.load(id).await?;

        let validated = match RestaurantName::new(&name) {
            Ok(validated) => validated,
            Err(error) => {
                debug!(%error, restaurant_id = %id, "restaurant update rejected");
                return Ok(UpdateRestaurantOutcome::Rejected {
                    current,
                    rejection: rejection(name, &error),
                });
            }
        };

        let updated = self
            .restaurant_repo
            .update_name(id, &validated)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        info!(restaurant_id = %id, "restaurant renamed");
        Ok(UpdateRestaurantOutcome::Updated(updated))
    }

    async fn destroy_restaurant(
        &self,
        request: DestroyRestaurantRequest,
    ) -> Result<DestroyRestaurantOutcome, Error> {
        let DestroyRestaurantRequest { id, caller } = request;
        let current = self.load(id).await?;

        if !current.is_owned_by(&caller) {
            info!(
                restaurant_id = %id,
                caller = %caller,
                "restaurant delete refused: caller is not the owner"
            );
            return Ok(DestroyRestaurantOutcome::NotOwner(current));
        }

        let removed = self
            .restaurant_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(id));
        }

        info!(restaurant_id = %id, "restaurant deleted");
        Ok(DestroyRestaurantOutcome::Deleted(current))
    }
}

#[cfg(test)]
#[path = "restaurant_service_tests.rs"]
mod tests;
