//! Authentication gate for mutating restaurant actions.
//!
//! Handlers that take an [`AuthenticatedUser`] argument only run for a
//! signed-in caller. Anyone else is redirected to the sign-in page before the
//! handler body, and therefore the store, is reached.

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::UserId;

use super::routes::SIGN_IN_PATH;
use super::session::SessionContext;
use super::views::RedirectView;

/// Alert attached to the sign-in redirect.
pub const SIGN_IN_REQUIRED: &str = "You need to sign in or sign up before continuing.";

/// The signed-in caller of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    /// Identifier stored in the session.
    pub fn id(&self) -> &UserId {
        &self.0
    }

    /// Consume the extractor, yielding the identifier.
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

fn sign_in_redirect(path: &str) -> actix_web::Error {
    debug!(path, "unauthenticated request redirected to sign in");
    let response = RedirectView::to(SIGN_IN_PATH)
        .with_alert(SIGN_IN_REQUIRED)
        .into_response();
    InternalError::from_response("authentication required", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        let path = req.path().to_owned();
        Box::pin(async move {
            match session.await?.user_id()? {
                Some(id) => Ok(Self(id)),
                None => Err(sign_in_redirect(&path)),
            }
        })
    }
}
