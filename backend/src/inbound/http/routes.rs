//! Route table.
//!
//! ```text
//! GET    /                        index
//! GET    /restaurants             index
//! POST   /restaurants             create     (signed in)
//! GET    /restaurants/new         new        (signed in)
//! GET    /restaurants/{id}        show
//! GET    /restaurants/{id}/edit   edit       (signed in)
//! PATCH  /restaurants/{id}        update     (signed in)
//! PUT    /restaurants/{id}        update     (signed in)
//! DELETE /restaurants/{id}        destroy    (signed in)
//! GET    /users/sign_up           sign-up form
//! POST   /users                   register
//! GET    /users/sign_in           sign-in form
//! POST   /users/sign_in           sign in
//! DELETE /users/sign_out          sign out
//! GET    /health/ready            readiness probe
//! GET    /health/live             liveness probe
//! ```

use actix_web::http::Method;
use actix_web::web;

use crate::domain::RestaurantId;

use super::{health, restaurants, users};

/// Site root; serves the restaurant index.
pub const ROOT_PATH: &str = "/";
/// Restaurant collection and redirect target after most actions.
pub const RESTAURANTS_PATH: &str = "/restaurants";
/// Blank creation form.
pub const NEW_RESTAURANT_PATH: &str = "/restaurants/new";
/// Sign-up submission.
pub const USERS_PATH: &str = "/users";
/// Sign-up form.
pub const SIGN_UP_PATH: &str = "/users/sign_up";
/// Sign-in form and submission; anonymous callers of gated actions land here.
pub const SIGN_IN_PATH: &str = "/users/sign_in";
/// Session teardown.
pub const SIGN_OUT_PATH: &str = "/users/sign_out";

/// Member path for `id`, e.g. `/restaurants/7`.
pub fn restaurant_path(id: RestaurantId) -> String {
    format!("{RESTAURANTS_PATH}/{id}")
}

/// Edit form path for `id`.
pub fn restaurant_edit_path(id: RestaurantId) -> String {
    format!("{RESTAURANTS_PATH}/{id}/edit")
}

/// Resourceful actions on the restaurants collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantAction {
    Index,
    Show,
    New,
    Create,
    Edit,
    Update,
    Destroy,
}

impl RestaurantAction {
    pub const ALL: [Self; 7] = [
        Self::Index,
        Self::Show,
        Self::New,
        Self::Create,
        Self::Edit,
        Self::Update,
        Self::Destroy,
    ];

    /// Whether the action is gated behind sign in.
    ///
    /// Handlers for gated actions take an
    /// [`AuthenticatedUser`](super::auth::AuthenticatedUser) argument.
    pub fn requires_authentication(self) -> bool {
        !matches!(self, Self::Index | Self::Show)
    }

    /// Canonical method and path for the action on restaurant `id`.
    ///
    /// Collection actions ignore `id`. Update uses `PATCH`.
    pub fn request_line(self, id: RestaurantId) -> (Method, String) {
        match self {
            Self::Index => (Method::GET, RESTAURANTS_PATH.to_owned()),
            Self::Show => (Method::GET, restaurant_path(id)),
            Self::New => (Method::GET, NEW_RESTAURANT_PATH.to_owned()),
            Self::Create => (Method::POST, RESTAURANTS_PATH.to_owned()),
            Self::Edit => (Method::GET, restaurant_edit_path(id)),
            Self::Update => (Method::PATCH, restaurant_path(id)),
            Self::Destroy => (Method::DELETE, restaurant_path(id)),
        }
    }
}

/// Register every route on `cfg`.
///
/// `/restaurants/new` is registered before `/restaurants/{id}` so the literal
/// segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(ROOT_PATH).route(web::get().to(restaurants::index)))
        .service(
            web::resource(RESTAURANTS_PATH)
                .route(web::get().to(restaurants::index))
                .route(web::post().to(restaurants::create)),
        )
        .service(web::resource(NEW_RESTAURANT_PATH).route(web::get().to(restaurants::new)))
        .service(
            web::resource("/restaurants/{id}/edit").route(web::get().to(restaurants::edit)),
        )
        .service(
            web::resource("/restaurants/{id}")
                .route(web::get().to(restaurants::show))
                .route(web::patch().to(restaurants::update))
                .route(web::put().to(restaurants::update))
                .route(web::delete().to(restaurants::destroy)),
        )
        .service(web::resource(SIGN_UP_PATH).route(web::get().to(users::sign_up_form)))
        .service(web::resource(USERS_PATH).route(web::post().to(users::register)))
        .service(
            web::resource(SIGN_IN_PATH)
                .route(web::get().to(users::sign_in_form))
                .route(web::post().to(users::sign_in)),
        )
        .service(web::resource(SIGN_OUT_PATH).route(web::delete().to(users::sign_out)))
        .service(web::resource("/health/ready").route(web::get().to(health::ready)))
        .service(web::resource("/health/live").route(web::get().to(health::live)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RestaurantAction::Index, false)]
    #[case(RestaurantAction::Show, false)]
    #[case(RestaurantAction::New, true)]
    #[case(RestaurantAction::Create, true)]
    #[case(RestaurantAction::Edit, true)]
    #[case(RestaurantAction::Update, true)]
    #[case(RestaurantAction::Destroy, true)]
    fn gating_matches_action(#[case] action: RestaurantAction, #[case] gated: bool) {
        assert_eq!(action.requires_authentication(), gated);
    }

    #[rstest]
    fn only_reads_are_public() {
        let public: Vec<_> = RestaurantAction::ALL
            .into_iter()
            .filter(|action| !action.requires_authentication())
            .collect();
        assert_eq!(public, vec![RestaurantAction::Index, RestaurantAction::Show]);
    }

    #[rstest]
    fn destroy_targets_the_member_path() {
        let id = RestaurantId::new(3).expect("positive id");
        assert_eq!(
            RestaurantAction::Destroy.request_line(id),
            (Method::DELETE, "/restaurants/3".to_owned())
        );
    }

    #[rstest]
    fn member_paths_embed_the_id() {
        let id = RestaurantId::new(12).expect("positive id");
        assert_eq!(restaurant_path(id), "/restaurants/12");
        assert_eq!(restaurant_edit_path(id), "/restaurants/12/edit");
    }
}
