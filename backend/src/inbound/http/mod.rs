//! HTTP inbound adapter.

pub mod auth;
pub mod error;
pub mod health;
pub mod restaurants;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::ApiResult;
