//! JSON view models returned by the HTML-free front end.
//!
//! Every page the service would render is expressed as a serialisable view
//! carrying the same text and links a browser would see. Redirects carry
//! their flash message in the body instead of the session.

use actix_web::HttpResponse;
use actix_web::http::header;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Restaurant, SignUpValidationError};

use super::routes::{
    NEW_RESTAURANT_PATH, RESTAURANTS_PATH, SIGN_IN_PATH, SIGN_UP_PATH, USERS_PATH,
    restaurant_edit_path, restaurant_path,
};

/// Prompt shown by the index when no restaurant exists.
pub const EMPTY_PROMPT: &str = "No restaurants yet";
/// Label of the link to the creation form.
pub const ADD_RESTAURANT_LABEL: &str = "Add a restaurant";

/// Hyperlink rendered by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[schema(example = "Add a restaurant")]
    pub label: String,
    #[schema(example = "/restaurants/new")]
    pub href: String,
    /// HTTP method for non-GET links such as delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Link {
    /// Plain navigation link.
    pub fn get(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            method: None,
        }
    }

    /// Link that must be followed with `DELETE`.
    pub fn delete(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            method: Some("delete".to_owned()),
            ..Self::get(label, href)
        }
    }
}

/// Per-restaurant links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantLinks {
    pub show: Link,
    pub edit: Link,
    pub delete: Link,
}

/// A single restaurant as shown by the index and show pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "KFC")]
    pub name: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub owner_id: String,
    pub links: RestaurantLinks,
}

impl From<&Restaurant> for RestaurantView {
    fn from(restaurant: &Restaurant) -> Self {
        let id = restaurant.id();
        let name = restaurant.name().as_ref();
        Self {
            id: id.get(),
            name: name.to_owned(),
            owner_id: restaurant.owner_id().to_string(),
            links: RestaurantLinks {
                show: Link::get(name, restaurant_path(id)),
                edit: Link::get(format!("Edit {name}"), restaurant_edit_path(id)),
                delete: Link::delete(format!("Delete {name}"), restaurant_path(id)),
            },
        }
    }
}

/// The index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListView {
    pub restaurants: Vec<RestaurantView>,
    /// Present only when `restaurants` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_prompt: Option<String>,
    pub add_restaurant_link: Link,
    pub signed_in: bool,
}

impl RestaurantListView {
    /// Index over `restaurants`; the prompt appears only when it is empty.
    pub fn new(restaurants: &[Restaurant], signed_in: bool) -> Self {
        Self {
            restaurants: restaurants.iter().map(RestaurantView::from).collect(),
            empty_prompt: restaurants.is_empty().then(|| EMPTY_PROMPT.to_owned()),
            add_restaurant_link: Link::get(ADD_RESTAURANT_LABEL, NEW_RESTAURANT_PATH),
            signed_in,
        }
    }
}

/// Values echoed back into the restaurant form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantFields {
    #[schema(example = "KFC")]
    pub name: String,
}

/// Creation and edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFormView {
    #[schema(example = "New restaurant")]
    pub title: String,
    #[schema(example = "/restaurants")]
    pub action: String,
    #[schema(example = "post")]
    pub method: String,
    #[schema(example = "Create Restaurant")]
    pub submit_label: String,
    pub fields: RestaurantFields,
    pub errors: Vec<String>,
}

impl RestaurantFormView {
    /// Blank creation form, or the redisplay of a rejected submission.
    pub fn create(name: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            title: "New restaurant".to_owned(),
            action: RESTAURANTS_PATH.to_owned(),
            method: "post".to_owned(),
            submit_label: "Create Restaurant".to_owned(),
            fields: RestaurantFields { name: name.into() },
            errors,
        }
    }

    /// Edit form prefilled with the stored name.
    pub fn edit(restaurant: &Restaurant) -> Self {
        Self {
            title: format!("Edit {}", restaurant.name()),
            action: restaurant_path(restaurant.id()),
            method: "patch".to_owned(),
            submit_label: "Update Restaurant".to_owned(),
            fields: RestaurantFields {
                name: restaurant.name().as_ref().to_owned(),
            },
            errors: Vec::new(),
        }
    }
}

/// Values echoed back into the sign-in and sign-up forms. Passwords never
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountFields {
    #[schema(example = "name@name.com")]
    pub email: String,
}

/// Sign-in page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInFormView {
    pub title: String,
    pub action: String,
    pub method: String,
    #[schema(example = "Log in")]
    pub submit_label: String,
    pub fields: AccountFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    pub sign_up_link: Link,
}

impl SignInFormView {
    pub fn new(email: impl Into<String>, alert: Option<String>) -> Self {
        Self {
            title: "Log in".to_owned(),
            action: SIGN_IN_PATH.to_owned(),
            method: "post".to_owned(),
            submit_label: "Log in".to_owned(),
            fields: AccountFields {
                email: email.into(),
            },
            alert,
            sign_up_link: Link::get("Sign up", SIGN_UP_PATH),
        }
    }
}

/// Sign-up page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpFormView {
    pub title: String,
    pub action: String,
    pub method: String,
    #[schema(example = "Sign up")]
    pub submit_label: String,
    pub fields: AccountFields,
    pub errors: Vec<String>,
    pub sign_in_link: Link,
}

impl SignUpFormView {
    pub fn new(email: impl Into<String>, errors: &[SignUpValidationError]) -> Self {
        Self {
            title: "Sign up".to_owned(),
            action: USERS_PATH.to_owned(),
            method: "post".to_owned(),
            submit_label: "Sign up".to_owned(),
            fields: AccountFields {
                email: email.into(),
            },
            errors: errors.iter().map(ToString::to_string).collect(),
            sign_in_link: Link::get("Log in", SIGN_IN_PATH),
        }
    }
}

/// Body of every `302 Found` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RedirectView {
    #[schema(example = "/restaurants")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Restaurant deleted successfully")]
    pub notice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl RedirectView {
    /// Redirect to `location` with no flash message.
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            notice: None,
            alert: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    #[must_use]
    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    /// `302 Found` pointing at `location`, with this view as the body.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, self.location.clone()))
            .json(self)
    }
}
