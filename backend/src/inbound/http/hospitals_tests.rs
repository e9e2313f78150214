//! Tests for hospital-administration HTTP handlers.

use super::*;
use crate::domain::AccountStatus;
use crate::domain::ports::{
    AddHospitalVaccineResponse, AuthenticatedAccount, LoginResponse, NursePayload,
};
use crate::inbound::http::test_utils::TestPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

const ADMIN_ID: &str = "d4c3b2a1-0f9e-4d8c-b7a6-5e4f3d2c1b0a";
const HOSPITAL_ID: &str = "1a2b3c4d-5e6f-4a1b-8c2d-9e0f1a2b3c4d";
const VACCINE_ID: &str = "0f1e2d3c-4b5a-4697-8869-7a8b9c0d1e2f";

fn authenticated_ports(role: AccountRole) -> TestPorts {
    let mut ports = TestPorts::default();
    ports.accounts.expect_login().returning(move |_| {
        Ok(LoginResponse {
            account: Some(AuthenticatedAccount {
                account_id: ADMIN_ID.parse().expect("fixture id"),
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
                .service(hospital_exists)
                .service(list_hospitals)
                .service(create_hospital)
                .service(hospital_nurses)
                .service(hospital_vaccines)
                .service(add_hospital_vaccine),
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
            "email": "admin@example.com",
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
async fn existence_probe_reports_both_verdicts() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports
        .hospitals_query
        .expect_hospital_exists()
        .withf(|name| name == "St Mary")
        .returning(|_| Ok(true));
    ports
        .hospitals_query
        .expect_hospital_exists()
        .withf(|name| name == "Nowhere")
        .returning(|_| Ok(false));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let found = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/hospital/St%20Mary")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(found).await;
    assert_eq!(body, serde_json::json!({"status": "Exist"}));

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/hospital/Nowhere")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(missing).await;
    assert_eq!(body, serde_json::json!({"status": "Not Exist"}));
}

#[actix_web::test]
async fn listing_requires_an_admin_session() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Nurse))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/hospitals")
            .cookie(cookie)
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
async fn listing_returns_hospitals_in_port_order() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports.hospitals_query.expect_list_hospitals().returning(|| {
        Ok(vec![
            HospitalPayload {
                id: HOSPITAL_ID.parse().expect("fixture id"),
                name: "Central Clinic".to_owned(),
            },
            HospitalPayload {
                id: VACCINE_ID.parse().expect("fixture id"),
                name: "St Mary".to_owned(),
            },
        ])
    });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/hospitals")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|hospital| hospital["name"].as_str())
        .collect();
    assert_eq!(names, ["Central Clinic", "St Mary"]);
}

#[actix_web::test]
async fn creation_passes_the_name_through() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports
        .hospitals
        .expect_create_hospital()
        .withf(|request| request.name == "Central Clinic")
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/hospital")
            .cookie(cookie)
            .set_json(serde_json::json!({"name": "Central Clinic"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn nurse_roster_resolves_the_hospital() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports
        .nurses_query
        .expect_list_by_hospital()
        .withf(|id| id.to_string() == HOSPITAL_ID)
        .returning(|_| {
            Ok(vec![NursePayload {
                id: ADMIN_ID.parse().expect("fixture id"),
                email: "nurse@example.com".to_owned(),
                first_name: "Joy".to_owned(),
                last_name: "Abara".to_owned(),
                status: AccountStatus::Verified,
                hospital_id: Some(HOSPITAL_ID.parse().expect("fixture id")),
            }])
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/hospital/nurses")
            .cookie(cookie)
            .set_json(serde_json::json!({"id": HOSPITAL_ID}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body[0]["firstName"], "Joy");
    assert_eq!(body[0]["hospitalId"], HOSPITAL_ID);
}

#[actix_web::test]
async fn shelf_listing_maps_denomination_and_quantity() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports
        .hospitals_query
        .expect_inventory()
        .returning(|_| {
            Ok(vec![InventoryItem {
                denomination: "BCG".to_owned(),
                quantity: 12,
            }])
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/hospital/vaccines")
            .cookie(cookie)
            .set_json(serde_json::json!({"id": HOSPITAL_ID}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!([{"denomination": "BCG", "quantity": 12}])
    );
}

#[actix_web::test]
async fn attaching_a_vaccine_is_a_nurse_operation() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .hospitals
        .expect_add_vaccine()
        .withf(|request| {
            request.hospital_id.to_string() == HOSPITAL_ID
                && request.vaccine_id.to_string() == VACCINE_ID
                && request.stock == 250
        })
        .returning(|_| Ok(AddHospitalVaccineResponse {
            already_linked: false,
        }));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/hospital/add-vaccine")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "hospitalId": HOSPITAL_ID,
                "vaccineId": VACCINE_ID,
                "stock": 250,
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({}));
}

#[actix_web::test]
async fn attaching_an_attached_vaccine_reports_exist() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .hospitals
        .expect_add_vaccine()
        .returning(|_| Ok(AddHospitalVaccineResponse {
            already_linked: true,
        }));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/hospital/add-vaccine")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "hospitalId": HOSPITAL_ID,
                "vaccineId": VACCINE_ID,
                "stock": 0,
            }))
            .to_request(),
    )
    .await;

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "Exist"}));
}
