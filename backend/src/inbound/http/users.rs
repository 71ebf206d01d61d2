//! Account handlers: sign up, sign in and sign out.
//!
//! ```text
//! GET    /users/sign_up
//! POST   /users            {"email":"name@name.com","password":"12345678","passwordConfirmation":"12345678"}
//! GET    /users/sign_in
//! POST   /users/sign_in    {"email":"name@name.com","password":"12345678"}
//! DELETE /users/sign_out
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ports::RegistrationOutcome;
use crate::domain::{ErrorCode, LoginCredentials, SignUpDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::routes::RESTAURANTS_PATH;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{RedirectView, SignInFormView, SignUpFormView};

pub const SIGNED_UP_NOTICE: &str = "Welcome! You have signed up successfully.";
pub const SIGNED_IN_NOTICE: &str = "Signed in successfully.";
pub const SIGNED_OUT_NOTICE: &str = "Signed out successfully.";
pub const INVALID_SIGN_IN_ALERT: &str = "Invalid email or password.";

/// Sign-in body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignInForm {
    #[serde(default)]
    #[schema(example = "name@name.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "12345678")]
    pub password: String,
}

/// Sign-up body. The confirmation is also accepted as
/// `password_confirmation` for form posts.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[serde(default)]
    #[schema(example = "name@name.com")]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "password_confirmation")]
    pub password_confirmation: String,
}

type Body<T> = web::Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: Body<T>) -> T {
    match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    }
}

/// Blank sign-up form.
#[utoipa::path(
    get,
    path = "/users/sign_up",
    responses((status = 200, description = "Sign-up form", body = SignUpFormView)),
    tags = ["users"],
    operation_id = "signUpForm",
    security([])
)]
pub async fn sign_up_form() -> web::Json<SignUpFormView> {
    web::Json(SignUpFormView::new("", &[]))
}

/// Register an account and sign it in.
#[utoipa::path(
    post,
    path = "/users",
    request_body = SignUpForm,
    responses(
        (status = 302, description = "Registered and signed in", body = RedirectView,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 200, description = "Rejected; form redisplayed with errors", body = SignUpFormView),
        (status = 503, description = "Account store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: Body<SignUpForm>,
) -> ApiResult<HttpResponse> {
    let form = into_inner(body);
    let details =
        match SignUpDetails::try_from_parts(&form.email, &form.password, &form.password_confirmation)
        {
            Ok(details) => details,
            Err(errors) => {
                debug!(count = errors.len(), "sign up rejected by validation");
                return Ok(HttpResponse::Ok().json(SignUpFormView::new(form.email, &errors)));
            }
        };

    match state.registration.register(&details).await? {
        RegistrationOutcome::Registered(user_id) => {
            session.sign_in(&user_id)?;
            info!(user_id = %user_id, "account registered");
            Ok(RedirectView::to(RESTAURANTS_PATH)
                .with_notice(SIGNED_UP_NOTICE)
                .into_response())
        }
        RegistrationOutcome::Rejected(errors) => {
            Ok(HttpResponse::Ok().json(SignUpFormView::new(form.email, &errors)))
        }
    }
}

/// Blank sign-in form.
#[utoipa::path(
    get,
    path = "/users/sign_in",
    responses((status = 200, description = "Sign-in form", body = SignInFormView)),
    tags = ["users"],
    operation_id = "signInForm",
    security([])
)]
pub async fn sign_in_form() -> web::Json<SignInFormView> {
    web::Json(SignInFormView::new("", None))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/users/sign_in",
    request_body = SignInForm,
    responses(
        (status = 302, description = "Signed in", body = RedirectView,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 200, description = "Invalid credentials; form redisplayed with an alert", body = SignInFormView),
        (status = 503, description = "Account store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signIn",
    security([])
)]
pub async fn sign_in(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: Body<SignInForm>,
) -> ApiResult<HttpResponse> {
    let form = into_inner(body);
    let rejected = |email: String| {
        HttpResponse::Ok().json(SignInFormView::new(
            email,
            Some(INVALID_SIGN_IN_ALERT.to_owned()),
        ))
    };

    let Ok(credentials) = LoginCredentials::try_from_parts(&form.email, &form.password) else {
        return Ok(rejected(form.email));
    };

    match state.login.authenticate(&credentials).await {
        Ok(user_id) => {
            session.sign_in(&user_id)?;
            Ok(RedirectView::to(RESTAURANTS_PATH)
                .with_notice(SIGNED_IN_NOTICE)
                .into_response())
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => Ok(rejected(form.email)),
        Err(error) => Err(error),
    }
}

/// End the session.
#[utoipa::path(
    delete,
    path = "/users/sign_out",
    responses(
        (status = 302, description = "Signed out", body = RedirectView,
            headers(("Set-Cookie" = String, description = "Expired session cookie")))
    ),
    tags = ["users"],
    operation_id = "signOut",
    security([])
)]
pub async fn sign_out(session: SessionContext) -> HttpResponse {
    session.sign_out();
    RedirectView::to(RESTAURANTS_PATH)
        .with_notice(SIGNED_OUT_NOTICE)
        .into_response()
}
