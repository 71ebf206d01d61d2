//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod login_service;
mod registration_service;
mod restaurant_repository;
mod restaurants_command;
mod restaurants_query;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{RegistrationOutcome, RegistrationService};
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{RestaurantRepository, RestaurantRepositoryError};
pub use restaurants_command::{
    CreateRestaurantOutcome, CreateRestaurantRequest, DestroyRestaurantOutcome,
    DestroyRestaurantRequest, RestaurantRejection, RestaurantsCommand, UpdateRestaurantOutcome,
    UpdateRestaurantRequest,
};
pub use restaurants_query::RestaurantsQuery;
