//! Domain primitives, services and ports.
//!
//! Purpose: hold the restaurant and account rules independently of HTTP and
//! storage. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement the driven ones.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure envelope.
//! - `Restaurant`, `RestaurantId`, `RestaurantName`: the managed resource.
//! - `UserId`, `EmailAddress`, `Account`: caller identity.
//! - `RestaurantService`, `AccountService`: port implementations.

pub mod account;
pub mod account_service;
pub mod auth;
pub mod error;
pub mod ports;
pub mod restaurant;
pub mod restaurant_service;
pub mod trace_id;
pub mod user;

pub use self::account::{Account, PasswordDigest};
pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PASSWORD_MAX, PASSWORD_MIN, SignUpDetails,
    SignUpValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::restaurant::{
    NewRestaurant, RESTAURANT_NAME_MIN, Restaurant, RestaurantId, RestaurantName,
    RestaurantValidationError,
};
pub use self::restaurant_service::RestaurantService;
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, UserId, UserValidationError};
