//! `RestaurantRepository` backed by a locked `BTreeMap`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RestaurantRepository, RestaurantRepositoryError};
use crate::domain::{NewRestaurant, Restaurant, RestaurantId, RestaurantName};

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<RestaurantId, Restaurant>,
}

/// In-memory restaurant store.
///
/// Ids start at 1 and are never reused, matching a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryRestaurantRepository {
    state: Mutex<State>,
}

impl InMemoryRestaurantRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, RestaurantRepositoryError> {
        self.state
            .lock()
            .map_err(|_| RestaurantRepositoryError::query("restaurant store lock poisoned"))
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let state = self.lock()?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn insert(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<Restaurant, RestaurantRepositoryError> {
        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| RestaurantRepositoryError::query("restaurant id space exhausted"))?;
        let id = RestaurantId::new(next)
            .map_err(|err| RestaurantRepositoryError::query(err.to_string()))?;
        state.last_id = next;

        let stored = Restaurant::new(id, restaurant.name.clone(), restaurant.owner_id.clone());
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let state = self.lock()?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn update_name(
        &self,
        id: RestaurantId,
        name: &RestaurantName,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let mut state = self.lock()?;
        let Some(row) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        *row = row.renamed(name.clone());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantRepositoryError> {
        let mut state = self.lock()?;
        Ok(state.rows.remove(&id).is_some())
    }
}
