//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against in-memory or mocked services.

use std::sync::Arc;

use crate::domain::ports::{LoginService, RegistrationService, RestaurantsCommand, RestaurantsQuery};

/// Port bundle passed to [`HttpState::new`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub restaurants: Arc<dyn RestaurantsQuery>,
    pub restaurants_command: Arc<dyn RestaurantsCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub restaurants: Arc<dyn RestaurantsQuery>,
    pub restaurants_command: Arc<dyn RestaurantsCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use yelp::domain::{AccountService, RestaurantService};
    /// use yelp::inbound::http::state::{HttpState, HttpStatePorts};
    /// use yelp::outbound::memory::{InMemoryAccountRepository, InMemoryRestaurantRepository};
    ///
    /// let accounts = Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new())));
    /// let restaurants = Arc::new(RestaurantService::new(Arc::new(
    ///     InMemoryRestaurantRepository::new(),
    /// )));
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: accounts.clone(),
    ///     registration: accounts,
    ///     restaurants: restaurants.clone(),
    ///     restaurants_command: restaurants,
    /// });
    /// let _query = state.restaurants.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            registration,
            restaurants,
            restaurants_command,
        } = ports;
        Self {
            login,
            registration,
            restaurants,
            restaurants_command,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
