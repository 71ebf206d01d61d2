//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn query_failure() -> Error {
    Error::internal("relation \"restaurants\" does not exist")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"sql": "select"}))
}

async fn decode(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialises")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("restaurant 9 not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(query_failure: Error) {
    let response = ResponseError::error_response(&query_failure);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some(TRACE_ID)
    );

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), REDACTED_MESSAGE);
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn not_found_passes_through_without_trace_header() {
    let response = ResponseError::error_response(&Error::not_found("restaurant 9 not found"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::NotFound);
    assert_eq!(payload.message(), "restaurant 9 not found");
}

#[actix_web::test]
async fn unknown_routes_answer_not_found() {
    let app = actix_test::init_service(App::new().default_service(web::to(unknown_route))).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/menus").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let payload: Error = actix_test::read_body_json(res).await;
    assert_eq!(payload.message(), "no route for GET /menus");
}

#[given("a service unavailable error code")]
fn a_service_unavailable_error_code() -> ErrorCode {
    ErrorCode::ServiceUnavailable
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code(code: ErrorCode) -> StatusCode {
    status_for(code)
}

#[then("the status is 503 Service Unavailable")]
fn the_status_is_503(status: StatusCode) {
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
fn service_unavailable_maps_to_503() {
    let code = a_service_unavailable_error_code();
    let status = the_adapter_maps_the_code(code);
    the_status_is_503(status);
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), REDACTED_MESSAGE);
    assert_eq!(err.details(), None);
}
