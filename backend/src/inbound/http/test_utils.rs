//! Test helpers for inbound HTTP components.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;

pub use crate::test_support::test_session_middleware;

/// The `session` cookie set by `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}
