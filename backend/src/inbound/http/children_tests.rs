//! Tests for child-record HTTP handlers.

use super::*;
use crate::domain::ports::{AuthenticatedAccount, ChildPayload, LoginResponse};
use crate::inbound::http::test_utils::TestPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use serde_json::Value;

const PARENT_ID: &str = "5f0c1a32-7d4e-4f6b-9a1c-3d2e5b8c9f01";
const CHILD_ID: &str = "9b7e6d5c-4a3b-2c1d-8e9f-0a1b2c3d4e5f";

fn authenticated_ports(role: AccountRole) -> TestPorts {
    let mut ports = TestPorts::default();
    ports.accounts.expect_login().returning(move |_| {
        Ok(LoginResponse {
            account: Some(AuthenticatedAccount {
                account_id: PARENT_ID.parse().expect("fixture id"),
                role,
            }),
            href: role.home_path().to_owned(),
        })
    });
    ports
}

fn child_payload() -> ChildPayload {
    ChildPayload {
        id: CHILD_ID.parse().expect("fixture id"),
        first_name: "Ada".to_owned(),
        last_name: "Hopper".to_owned(),
        birthdate: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        parent_id: PARENT_ID.parse().expect("fixture id"),
    }
}

fn test_app(
    ports: TestPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(crate::inbound::http::test_utils::test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(crate::inbound::http::accounts::login)
                .service(get_child)
                .service(create_child)
                .service(update_child)
                .service(delete_child),
        )
}

async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({
            "email": "account@example.com",
            "password": "password",
        }))
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

#[actix_web::test]
async fn get_child_returns_the_record_to_any_role() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .children_query
        .expect_get_child()
        .withf(|id| id.to_string() == CHILD_ID)
        .returning(|_| Ok(child_payload()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/child/{CHILD_ID}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("firstName").and_then(Value::as_str), Some("Ada"));
    assert_eq!(
        body.get("birthdate").and_then(Value::as_str),
        Some("2025-06-01")
    );
    assert!(body.get("first_name").is_none());
}

#[actix_web::test]
async fn get_child_unknown_id_is_not_found() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .children_query
        .expect_get_child()
        .returning(|id| Err(Error::not_found(format!("child {id} not found"))));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/child/{CHILD_ID}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_child_rejects_malformed_ids() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Parent))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/child/not-a-uuid")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("id")
    );
}

#[actix_web::test]
async fn get_child_requires_a_session() {
    let app = actix_test::init_service(test_app(TestPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/child/{CHILD_ID}"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_child_registers_under_the_session_parent() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .children
        .expect_create_child()
        .withf(|request| {
            request.parent_id.to_string() == PARENT_ID
                && request.first_name == "Ada"
                && request.last_name == "Hopper"
                && request.birthdate == NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
        })
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/child")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Hopper",
                "birthdate": "2025-06-01",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({}));
}

#[actix_web::test]
async fn create_child_rejects_other_date_forms() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Parent))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/child")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Hopper",
                "birthdate": "01/06/2025",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("invalid_date")
    );
}

#[actix_web::test]
async fn create_child_requires_a_parent_session() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Nurse))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/child")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Hopper",
                "birthdate": "2025-06-01",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn update_child_passes_the_editable_fields() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .children
        .expect_update_child()
        .withf(|request| {
            request.id.to_string() == CHILD_ID
                && request.first_name == "Grace"
                && request.birthdate == NaiveDate::from_ymd_opt(2025, 7, 2).expect("valid date")
        })
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/child")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "id": CHILD_ID,
                "firstName": "Grace",
                "birthdate": "2025-07-02",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({}));
}

#[actix_web::test]
async fn delete_child_responds_with_an_empty_object() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .children
        .expect_delete_child()
        .withf(|id| id.to_string() == CHILD_ID)
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/child/{CHILD_ID}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({}));
}
