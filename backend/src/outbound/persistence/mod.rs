//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table schema stay private to this module, and
//! every database failure is mapped onto the port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use yelp::outbound::persistence::{DbPool, DieselRestaurantRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/yelp")).await?;
//! let repo = DieselRestaurantRepository::new(pool);
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_restaurant_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
