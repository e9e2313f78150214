//! Tests for parent-account HTTP handlers.

use super::*;
use crate::domain::ports::{
    AuthenticatedAccount, ChildPayload, LoginResponse, UpdateUserResponse,
};
use crate::inbound::http::test_utils::TestPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::Value;

const ACCOUNT_ID: &str = "5f0c1a32-7d4e-4f6b-9a1c-3d2e5b8c9f01";
const CHILD_ID: &str = "9b7e6d5c-4a3b-2c1d-8e9f-0a1b2c3d4e5f";

fn authenticated_ports(role: AccountRole) -> TestPorts {
    let mut ports = TestPorts::default();
    ports.accounts.expect_login().returning(move |_| {
        Ok(LoginResponse {
            account: Some(AuthenticatedAccount {
                account_id: ACCOUNT_ID.parse().expect("fixture id"),
                role,
            }),
            href: role.home_path().to_owned(),
        })
    });
    ports
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
                .service(probe_account)
                .service(update_user)
                .service(children_by_email),
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

#[rstest]
#[case(true, "Exist")]
#[case(false, "Not Exist")]
#[actix_web::test]
async fn probe_reports_existence(#[case] exists: bool, #[case] expected: &str) {
    let mut ports = TestPorts::default();
    ports
        .accounts_query
        .expect_account_exists()
        .withf(|email| email == "parent@example.com")
        .returning(move |_| Ok(exists));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/user/parent@example.com")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("status").and_then(Value::as_str), Some(expected));
}

#[actix_web::test]
async fn update_user_uses_the_session_identity() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .accounts
        .expect_update_user()
        .withf(|request| {
            request.account_id.to_string() == ACCOUNT_ID
                && request.password == "fresh-password"
                && request.email.as_deref() == Some("new@example.com")
                && request.first_name.is_none()
                && request.last_name.is_none()
        })
        .returning(|_| {
            Ok(UpdateUserResponse {
                href: "/verification".to_owned(),
                end_session: true,
            })
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/user")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "password": "fresh-password",
                "email": "new@example.com",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cleared_cookie = response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("cleared session cookie")
        .into_owned();
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("href").and_then(Value::as_str),
        Some("/verification")
    );

    // The email change ended the session; the returned cookie no longer
    // authenticates.
    let retry = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/user")
            .cookie(cleared_cookie)
            .set_json(serde_json::json!({"password": "fresh-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(retry.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn update_user_without_email_change_keeps_an_empty_href() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports.accounts.expect_update_user().returning(|_| {
        Ok(UpdateUserResponse {
            href: String::new(),
            end_session: false,
        })
    });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/user")
            .cookie(cookie)
            .set_json(serde_json::json!({"password": "fresh-password"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("href").and_then(Value::as_str), Some(""));
}

#[actix_web::test]
async fn update_user_requires_a_parent_session() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Nurse))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/user")
            .cookie(cookie)
            .set_json(serde_json::json!({"password": "fresh-password"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/redirect").and_then(Value::as_str),
        Some("/nurse/home")
    );
}

#[actix_web::test]
async fn update_user_without_a_session_is_unauthorised() {
    let app = actix_test::init_service(test_app(TestPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/user")
            .set_json(serde_json::json!({"password": "fresh-password"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn children_by_email_lists_the_family() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .children_query
        .expect_children_for_parent_email()
        .withf(|email| email == "parent@example.com")
        .returning(|_| {
            Ok(vec![ChildPayload {
                id: CHILD_ID.parse().expect("fixture id"),
                first_name: "Ada".to_owned(),
                last_name: "Hopper".to_owned(),
                birthdate: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
                parent_id: ACCOUNT_ID.parse().expect("fixture id"),
            }])
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/user/children")
            .cookie(cookie)
            .set_json(serde_json::json!({"email": "parent@example.com"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let children = body.as_array().expect("array body");
    assert_eq!(children.len(), 1);
    assert_eq!(
        children[0].get("firstName").and_then(Value::as_str),
        Some("Ada")
    );
    assert_eq!(
        children[0].get("birthdate").and_then(Value::as_str),
        Some("2025-06-01")
    );
    assert_eq!(
        children[0].get("parentId").and_then(Value::as_str),
        Some(ACCOUNT_ID)
    );
}

#[actix_web::test]
async fn children_by_email_requires_a_nurse_session() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Parent))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/user/children")
            .cookie(cookie)
            .set_json(serde_json::json!({"email": "parent@example.com"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
