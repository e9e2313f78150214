//! Tests for role dashboard HTTP handlers.

use super::*;
use crate::domain::StockLevel;
use crate::domain::ports::{
    AuthenticatedAccount, ChildPayload, DoseAdministeredCount, DosePayload, HospitalInventoryLine,
    HospitalNurseCount, LoginResponse, NurseProfile, VaccineStockStatus,
};
use crate::inbound::http::test_utils::TestPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use serde_json::Value;

const ACCOUNT_ID: &str = "d4c3b2a1-0f9e-4d8c-b7a6-5e4f3d2c1b0a";
const HOSPITAL_ID: &str = "1a2b3c4d-5e6f-4a1b-8c2d-9e0f1a2b3c4d";
const VACCINE_ID: &str = "0f1e2d3c-4b5a-4697-8869-7a8b9c0d1e2f";
const DOSE_ID: &str = "7c8d9e0f-1a2b-4c3d-8e5f-6a7b8c9d0e1f";

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
                .service(admin_statistics)
                .service(parent_home)
                .service(nurse_home)
                .service(send_contact),
        )
}

// The complete endpoint registration, as the server mounts it.
fn full_api_app(
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
        .service(web::scope("/api/v1").configure(crate::inbound::http::api_services))
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

fn sample_child() -> ChildPayload {
    ChildPayload {
        id: DOSE_ID.parse().expect("fixture id"),
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        birthdate: NaiveDate::from_ymd_opt(2025, 3, 14).expect("fixture date"),
        parent_id: ACCOUNT_ID.parse().expect("fixture id"),
    }
}

fn sample_dose() -> DosePayload {
    DosePayload {
        id: DOSE_ID.parse().expect("fixture id"),
        denomination: "BCG birth dose".to_owned(),
        term: 1,
        vaccine_id: VACCINE_ID.parse().expect("fixture id"),
    }
}

#[actix_web::test]
async fn statistics_serialise_the_full_breakdown() {
    let mut ports = authenticated_ports(AccountRole::Admin);
    ports.dashboard.expect_statistics().returning(|| {
        Ok(AdminStatistics {
            nurses: 4,
            parents: 21,
            children: 33,
            nurses_per_hospital: vec![HospitalNurseCount {
                hospital_name: "Central Clinic".to_owned(),
                nurses: 3,
            }],
            stock_levels: vec![VaccineStockStatus {
                denomination: "BCG".to_owned(),
                stock: 310,
                status: StockLevel::Low,
            }],
            administered: vec![DoseAdministeredCount {
                denomination: "BCG birth dose".to_owned(),
                children: 17,
            }],
        })
    });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/admin/statistics")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["nurses"], 4);
    assert_eq!(body["parents"], 21);
    assert_eq!(
        body["nursesPerHospital"],
        serde_json::json!([{"hospital": "Central Clinic", "nurses": 3}])
    );
    assert_eq!(
        body["stockLevels"],
        serde_json::json!([{"denomination": "BCG", "stock": 310, "status": "Low"}])
    );
    assert_eq!(
        body["administered"],
        serde_json::json!([{"dose": "BCG birth dose", "children": 17}])
    );
}

#[actix_web::test]
async fn statistics_require_an_admin_session() {
    let app = actix_test::init_service(test_app(authenticated_ports(AccountRole::Parent))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/admin/statistics")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn parent_home_scopes_children_to_the_session() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .dashboard
        .expect_parent_home()
        .withf(|parent_id| parent_id.to_string() == ACCOUNT_ID)
        .returning(|_| {
            Ok(ParentHome {
                children: vec![sample_child()],
                doses: vec![sample_dose()],
            })
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/home")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["children"][0]["firstName"], "Ada");
    assert_eq!(body["children"][0]["birthdate"], "2025-03-14");
    assert_eq!(body["doses"][0]["term"], 1);
}

#[actix_web::test]
async fn nurse_home_keys_inventory_by_denomination() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .dashboard
        .expect_nurse_home()
        .withf(|nurse_id| nurse_id.to_string() == ACCOUNT_ID)
        .returning(|_| {
            Ok(NurseHome {
                hospital_name: "Central Clinic".to_owned(),
                inventory: vec![HospitalInventoryLine {
                    denomination: "BCG".to_owned(),
                    hospital_id: HOSPITAL_ID.parse().expect("fixture id"),
                    vaccine_id: VACCINE_ID.parse().expect("fixture id"),
                    quantity: 12,
                }],
                children: vec![sample_child()],
                doses: vec![sample_dose()],
            })
        });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/nurse/home")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["hospital"], "Central Clinic");
    assert_eq!(
        body["inventory"]["BCG"],
        serde_json::json!({
            "hospitalId": HOSPITAL_ID,
            "vaccineId": VACCINE_ID,
            "quantity": 12,
        })
    );
}

#[actix_web::test]
async fn nurse_home_resolves_under_the_full_registration() {
    let mut ports = authenticated_ports(AccountRole::Nurse);
    ports
        .dashboard
        .expect_nurse_home()
        .withf(|nurse_id| nurse_id.to_string() == ACCOUNT_ID)
        .returning(|_| {
            Ok(NurseHome {
                hospital_name: "Central Clinic".to_owned(),
                inventory: Vec::new(),
                children: Vec::new(),
                doses: Vec::new(),
            })
        });
    ports
        .nurses_query
        .expect_get_profile()
        .withf(|id| id.to_string() == ACCOUNT_ID)
        .returning(|_| {
            Ok(NurseProfile {
                email: "nurse@example.com".to_owned(),
                first_name: "Florence".to_owned(),
                last_name: "Nightingale".to_owned(),
                hospital: "Central Clinic".to_owned(),
            })
        });
    let app = actix_test::init_service(full_api_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    // "/nurse/home" must not be captured as an id by "/nurse/{id}".
    let home = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/nurse/home")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(home.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(home).await;
    assert_eq!(body["hospital"], "Central Clinic");

    // A real id still reaches the profile lookup.
    let profile = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/nurse/{ACCOUNT_ID}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(profile.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(profile).await;
    assert_eq!(body["firstName"], "Florence");
}

#[actix_web::test]
async fn contact_relays_the_session_identity() {
    let mut ports = authenticated_ports(AccountRole::Parent);
    ports
        .accounts
        .expect_send_contact()
        .withf(|request| {
            request.account_id.to_string() == ACCOUNT_ID
                && request.role == AccountRole::Parent
                && request.subject == "Stock question"
                && request.message == "Is BCG available this week?"
        })
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contact")
            .cookie(cookie)
            .set_json(serde_json::json!({
                "subject": "Stock question",
                "message": "Is BCG available this week?",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["status"],
        "Message sent successfully, Thank you!."
    );
}

#[actix_web::test]
async fn contact_requires_a_session() {
    let app = actix_test::init_service(test_app(TestPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contact")
            .set_json(serde_json::json!({"subject": "s", "message": "m"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
