//! Wiring shared by unit tests and the integration suites under `tests/`.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{AccountService, RestaurantService};
use crate::inbound::http::error::unknown_route;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryAccountRepository, InMemoryRestaurantRepository};

/// Session middleware with a fresh key and a non-`Secure` cookie named
/// `session`, suitable for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    session_middleware_with_key(Key::generate())
}

/// As [`test_session_middleware`] but with a caller-supplied key, so several
/// app instances can read each other's cookies.
pub fn session_middleware_with_key(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Handler state over empty in-memory stores.
///
/// The restaurant repository is returned too so tests can inspect what was
/// persisted without going through HTTP.
pub fn in_memory_state() -> (HttpState, Arc<InMemoryRestaurantRepository>) {
    let restaurant_repo = Arc::new(InMemoryRestaurantRepository::new());
    let restaurants = Arc::new(RestaurantService::new(restaurant_repo.clone()));
    let accounts = Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new())));
    let state = HttpState::new(HttpStatePorts {
        login: accounts.clone(),
        registration: accounts,
        restaurants: restaurants.clone(),
        restaurants_command: restaurants,
    });
    (state, restaurant_repo)
}

/// Full application over `state`, wired the way the server wires it minus
/// Swagger UI.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with_key(state, Key::generate())
}

/// [`test_app`] with a fixed session key, for servers whose workers must
/// share cookies.
pub fn test_app_with_key(
    state: HttpState,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(session_middleware_with_key(key))
        .wrap(Trace)
        .configure(routes::configure)
        .default_service(web::to(unknown_route))
}
