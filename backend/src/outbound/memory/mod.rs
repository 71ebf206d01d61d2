//! In-process repositories.
//!
//! Used when no database URL is configured and by handler tests. State lives
//! behind a `Mutex` and is lost when the process exits.

mod in_memory_account_repository;
mod in_memory_restaurant_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
pub use in_memory_restaurant_repository::InMemoryRestaurantRepository;
