//! Builders for the HTTP state ports.

use std::sync::Arc;

use yelp::domain::ports::{AccountRepository, RestaurantRepository};
use yelp::domain::{AccountService, RestaurantService};
use yelp::inbound::http::state::{HttpState, HttpStatePorts};
use yelp::outbound::memory::{InMemoryAccountRepository, InMemoryRestaurantRepository};
use yelp::outbound::persistence::{DieselAccountRepository, DieselRestaurantRepository};

use super::ServerConfig;

/// Wire account and restaurant services over one pair of repositories.
fn state_over<A, R>(accounts: A, restaurants: R) -> HttpState
where
    A: AccountRepository + 'static,
    R: RestaurantRepository + 'static,
{
    let accounts = Arc::new(AccountService::new(Arc::new(accounts)));
    let restaurants = Arc::new(RestaurantService::new(Arc::new(restaurants)));
    HttpState::new(HttpStatePorts {
        login: accounts.clone(),
        registration: accounts,
        restaurants: restaurants.clone(),
        restaurants_command: restaurants,
    })
}

/// Build handler state from the server configuration.
///
/// Diesel adapters are used when a pool is configured; otherwise both stores
/// live in memory and are lost on shutdown.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => state_over(
            DieselAccountRepository::new(pool.clone()),
            DieselRestaurantRepository::new(pool.clone()),
        ),
        None => state_over(
            InMemoryAccountRepository::new(),
            InMemoryRestaurantRepository::new(),
        ),
    }
}
