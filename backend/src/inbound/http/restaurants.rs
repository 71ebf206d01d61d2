//! Restaurant handlers.
//!
//! Reads are public; every other action takes an [`AuthenticatedUser`], so
//! anonymous callers are redirected to sign in before anything here runs.
//! Bodies are accepted as JSON or as a urlencoded form with a single `name`
//! field.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CreateRestaurantOutcome, CreateRestaurantRequest, DestroyRestaurantOutcome,
    DestroyRestaurantRequest, UpdateRestaurantOutcome, UpdateRestaurantRequest,
};
use crate::domain::{Error, RestaurantId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::routes::RESTAURANTS_PATH;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    RedirectView, RestaurantFormView, RestaurantListView, RestaurantView,
};

/// Notice shown after the owner deletes a restaurant.
pub const DELETED_NOTICE: &str = "Restaurant deleted successfully";
/// Notice shown when someone other than the owner tries to delete.
pub const NOT_OWNER_NOTICE: &str = "Cannot Delete Restaurant";

/// Create and update body.
///
/// A missing `name` is read as an empty one and fails validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RestaurantForm {
    #[serde(default)]
    #[schema(example = "KFC")]
    pub name: String,
}

pub(crate) type RestaurantBody = web::Either<web::Json<RestaurantForm>, web::Form<RestaurantForm>>;

fn form_from(body: RestaurantBody) -> RestaurantForm {
    match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    }
}

/// Unparsable ids answer 404 like ids that were never assigned.
fn parse_id(raw: &str) -> ApiResult<RestaurantId> {
    raw.parse().map_err(|_| {
        Error::not_found(format!("restaurant {raw} not found"))
            .with_details(json!({ "restaurantId": raw }))
    })
}

/// List every restaurant.
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "Restaurant index", body = RestaurantListView),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants",
    security([])
)]
pub async fn index(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<RestaurantListView>> {
    let restaurants = state.restaurants.list_restaurants().await?;
    let signed_in = session.user_id()?.is_some();
    Ok(web::Json(RestaurantListView::new(&restaurants, signed_in)))
}

/// Show one restaurant.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Restaurant", body = RestaurantView),
        (status = 404, description = "No such restaurant", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "showRestaurant",
    security([])
)]
pub async fn show(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RestaurantView>> {
    let id = parse_id(&path)?;
    let restaurant = state.restaurants.find_restaurant(id).await?;
    Ok(web::Json(RestaurantView::from(&restaurant)))
}

/// Blank creation form.
#[utoipa::path(
    get,
    path = "/restaurants/new",
    responses(
        (status = 200, description = "Creation form", body = RestaurantFormView),
        (status = 302, description = "Sign in required", body = RedirectView)
    ),
    tags = ["restaurants"],
    operation_id = "newRestaurant"
)]
pub async fn new(_user: AuthenticatedUser) -> web::Json<RestaurantFormView> {
    web::Json(RestaurantFormView::create("", Vec::new()))
}

/// Create a restaurant owned by the caller.
#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = RestaurantForm,
    responses(
        (status = 302, description = "Created, or sign in required", body = RedirectView,
            headers(("Location" = String, description = "Redirect target"))),
        (status = 200, description = "Rejected; form redisplayed with errors", body = RestaurantFormView),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "createRestaurant"
)]
pub async fn create(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    body: RestaurantBody,
) -> ApiResult<HttpResponse> {
    let form = form_from(body);
    let outcome = state
        .restaurants_command
        .create_restaurant(CreateRestaurantRequest {
            name: form.name,
            owner_id: user.into_inner(),
        })
        .await?;

    Ok(match outcome {
        CreateRestaurantOutcome::Created(restaurant) => {
            info!(id = %restaurant.id(), "restaurant created via http");
            RedirectView::to(RESTAURANTS_PATH).into_response()
        }
        CreateRestaurantOutcome::Rejected(rejection) => HttpResponse::Ok().json(
            RestaurantFormView::create(rejection.attempted_name, rejection.errors),
        ),
    })
}

/// Edit form for any restaurant.
#[utoipa::path(
    get,
    path = "/restaurants/{id}/edit",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Edit form", body = RestaurantFormView),
        (status = 302, description = "Sign in required", body = RedirectView),
        (status = 404, description = "No such restaurant", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "editRestaurant"
)]
pub async fn edit(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<RestaurantFormView>> {
    let id = parse_id(&path)?;
    let restaurant = state.restaurants.find_restaurant(id).await?;
    Ok(web::Json(RestaurantFormView::edit(&restaurant)))
}

/// Rename a restaurant. Any signed-in caller may do this.
#[utoipa::path(
    patch,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    request_body = RestaurantForm,
    responses(
        (status = 302, description = "Back to the index; rejected names carry an alert", body = RedirectView,
            headers(("Location" = String, description = "Redirect target"))),
        (status = 404, description = "No such restaurant", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "updateRestaurant"
)]
pub async fn update(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    body: RestaurantBody,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let form = form_from(body);
    let outcome = state
        .restaurants_command
        .update_restaurant(UpdateRestaurantRequest {
            id,
            name: form.name,
        })
        .await?;

    let redirect = RedirectView::to(RESTAURANTS_PATH);
    Ok(match outcome {
        UpdateRestaurantOutcome::Updated(_) => redirect,
        UpdateRestaurantOutcome::Rejected { rejection, .. } => {
            redirect.with_alert(rejection.errors.join(", "))
        }
    }
    .into_response())
}

/// Delete a restaurant if the caller owns it.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    responses(
        (status = 302, description = "Back to the index with the outcome as a notice", body = RedirectView,
            headers(("Location" = String, description = "Redirect target"))),
        (status = 404, description = "No such restaurant", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "destroyRestaurant"
)]
pub async fn destroy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let outcome = state
        .restaurants_command
        .destroy_restaurant(DestroyRestaurantRequest {
            id,
            caller: user.into_inner(),
        })
        .await?;

    let notice = match outcome {
        DestroyRestaurantOutcome::Deleted(_) => DELETED_NOTICE,
        DestroyRestaurantOutcome::NotOwner(_) => NOT_OWNER_NOTICE,
    };
    Ok(RedirectView::to(RESTAURANTS_PATH)
        .with_notice(notice)
        .into_response())
}

#[cfg(test)]
#[path = "restaurants_tests.rs"]
mod tests;
