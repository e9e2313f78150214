//! Tests for the HTTP mapping of domain errors.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "8e2f9a4c-0d11-4b2a-9b6e-5f3a1c7d2e90";

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("who"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("no"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn maps_every_code_to_a_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn responses_carry_the_trace_id_header_and_field() {
    let error = Error::not_found("child not registered").with_trace_id(TRACE_ID);

    let response = error.error_response();

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header");
    assert_eq!(header.to_str().expect("ascii header"), TRACE_ID);
    let body = body_json(response).await;
    assert_eq!(body["traceId"], TRACE_ID);
}

#[actix_web::test]
async fn responses_without_a_trace_id_omit_the_header() {
    let response = Error::invalid_request("bad birthdate").error_response();

    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_their_trace() {
    let error = Error::internal("pool checkout timed out")
        .with_details(json!({"pool": "primary"}))
        .with_trace_id(TRACE_ID);

    let response = error.error_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none());
    assert_eq!(body["traceId"], TRACE_ID);
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::forbidden("this endpoint is not available to your role")
        .with_details(json!({"redirect": "/nurse/home"}));

    let response = error.error_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(
        body["message"],
        "this endpoint is not available to your role"
    );
    assert_eq!(body["details"]["redirect"], "/nurse/home");
}

#[actix_web::test]
async fn actix_errors_become_redacted_internal_errors() {
    let promoted = Error::from(actix_web::error::ErrorBadRequest("session store exploded"));

    assert_eq!(promoted.code(), ErrorCode::InternalError);
    assert_eq!(promoted.to_string(), "Internal server error");
}
