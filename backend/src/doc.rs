//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every restaurant, account and health route together
//! with the view models they answer with and the error envelope wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::restaurants::RestaurantForm;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{SignInForm, SignUpForm};
use crate::inbound::http::views::{
    AccountFields, Link, RedirectView, RestaurantFields, RestaurantFormView, RestaurantLinks,
    RestaurantListView, RestaurantView, SignInFormView, SignUpFormView,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /users or POST /users/sign_in.",
            ))),
        );
    }
}

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Restaurants API",
        description = "Restaurant listings with session-authenticated changes and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::restaurants::index,
        crate::inbound::http::restaurants::show,
        crate::inbound::http::restaurants::new,
        crate::inbound::http::restaurants::create,
        crate::inbound::http::restaurants::edit,
        crate::inbound::http::restaurants::update,
        crate::inbound::http::restaurants::destroy,
        crate::inbound::http::users::sign_up_form,
        crate::inbound::http::users::register,
        crate::inbound::http::users::sign_in_form,
        crate::inbound::http::users::sign_in,
        crate::inbound::http::users::sign_out,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RestaurantForm,
        SignInForm,
        SignUpForm,
        Link,
        RestaurantLinks,
        RestaurantView,
        RestaurantListView,
        RestaurantFields,
        RestaurantFormView,
        AccountFields,
        SignInFormView,
        SignUpFormView,
        RedirectView,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "restaurants", description = "Restaurant listings"),
        (name = "users", description = "Sign up, sign in and sign out"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
