//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values before returning.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{restaurants, users};

/// Row struct for reading from the restaurants table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub owner_id: Uuid,
}

/// Insertable struct for creating restaurant records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub name: &'a str,
    pub owner_id: Uuid,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Insertable struct for creating account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewAccountRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
}
