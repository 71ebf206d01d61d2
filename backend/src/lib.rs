//! Restaurants service library modules.
//!
//! The binary in `main.rs` wires these together; integration tests reach the
//! in-memory application through [`test_support`] behind the `test-support`
//! feature.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
