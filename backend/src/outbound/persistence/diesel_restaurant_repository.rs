//! PostgreSQL-backed `RestaurantRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RestaurantRepository, RestaurantRepositoryError};
use crate::domain::{NewRestaurant, Restaurant, RestaurantId, RestaurantName, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewRestaurantRow, RestaurantRow};
use super::pool::{DbPool, PoolError};
use super::schema::restaurants;

/// Diesel-backed implementation of the restaurant repository port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RestaurantRepositoryError {
    map_basic_pool_error(error, RestaurantRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RestaurantRepositoryError {
    map_basic_diesel_error(
        error,
        RestaurantRepositoryError::query,
        RestaurantRepositoryError::connection,
    )
}

/// Convert a row into a domain restaurant, re-validating stored values.
fn row_to_restaurant(row: RestaurantRow) -> Result<Restaurant, RestaurantRepositoryError> {
    let RestaurantRow { id, name, owner_id } = row;
    let id = RestaurantId::new(id)
        .map_err(|err| RestaurantRepositoryError::query(format!("row id {id}: {err}")))?;
    let name = RestaurantName::new(name)
        .map_err(|err| RestaurantRepositoryError::query(format!("row {id} name: {err}")))?;
    Ok(Restaurant::new(id, name, UserId::from_uuid(owner_id)))
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = restaurants::table
            .order(restaurants::id.asc())
            .select(RestaurantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_restaurant).collect()
    }

    async fn insert(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<Restaurant, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewRestaurantRow {
            name: restaurant.name.as_ref(),
            owner_id: *restaurant.owner_id.as_uuid(),
        };

        let stored = diesel::insert_into(restaurants::table)
            .values(&row)
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_restaurant(stored)
    }

    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = restaurants::table
            .find(id.get())
            .select(RestaurantRow::as_select())
            .first::<RestaurantRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_restaurant).transpose()
    }

    async fn update_name(
        &self,
        id: RestaurantId,
        name: &RestaurantName,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(restaurants::table.find(id.get()))
            .set((
                restaurants::name.eq(name.as_ref()),
                restaurants::updated_at.eq(diesel::dsl::now),
            ))
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_restaurant).transpose()
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(restaurants::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            RestaurantRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(repo_err, RestaurantRepositoryError::Query { .. }));
    }

    #[rstest]
    fn valid_row_converts() {
        let owner = Uuid::new_v4();
        let restaurant = row_to_restaurant(RestaurantRow {
            id: 4,
            name: "KFC".to_owned(),
            owner_id: owner,
        })
        .expect("valid row");

        assert_eq!(restaurant.id().get(), 4);
        assert_eq!(restaurant.name().as_ref(), "KFC");
        assert_eq!(restaurant.owner_id().as_uuid(), &owner);
    }

    #[rstest]
    #[case(0, "KFC")]
    #[case(4, "kf")]
    fn corrupt_rows_are_query_errors(#[case] id: i64, #[case] name: &str) {
        let result = row_to_restaurant(RestaurantRow {
            id,
            name: name.to_owned(),
            owner_id: Uuid::new_v4(),
        });
        assert!(matches!(
            result,
            Err(RestaurantRepositoryError::Query { .. })
        ));
    }
}
