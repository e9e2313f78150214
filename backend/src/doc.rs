//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: every
//! endpoint of the inbound layer, the request/response body schemas, and the
//! session cookie security scheme. The generated document backs Swagger UI in
//! debug builds and is exported via `cargo run --bin openapi-dump` for
//! external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::schemas::{ChildBody, DoseBody, HrefBody, StatusBody};

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
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "VaxWise backend API",
        description = "HTTP interface for vaccination records, hospital inventory, and dose reminders.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::sign_up,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::accounts::verify_email,
        crate::inbound::http::users::probe_account,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::children_by_email,
        crate::inbound::http::children::get_child,
        crate::inbound::http::children::create_child,
        crate::inbound::http::children::update_child,
        crate::inbound::http::children::delete_child,
        crate::inbound::http::nurses::get_nurse,
        crate::inbound::http::nurses::list_nurses,
        crate::inbound::http::nurses::create_nurse,
        crate::inbound::http::nurses::update_nurse,
        crate::inbound::http::nurses::reassign_nurse,
        crate::inbound::http::nurses::delete_nurse,
        crate::inbound::http::hospitals::hospital_exists,
        crate::inbound::http::hospitals::list_hospitals,
        crate::inbound::http::hospitals::create_hospital,
        crate::inbound::http::hospitals::hospital_nurses,
        crate::inbound::http::hospitals::hospital_vaccines,
        crate::inbound::http::hospitals::add_hospital_vaccine,
        crate::inbound::http::vaccines::get_vaccine,
        crate::inbound::http::vaccines::list_vaccines,
        crate::inbound::http::vaccines::restock,
        crate::inbound::http::vaccinations::administer_dose,
        crate::inbound::http::vaccinations::vaccination_tracker,
        crate::inbound::http::dashboard::admin_statistics,
        crate::inbound::http::dashboard::parent_home,
        crate::inbound::http::dashboard::nurse_home,
        crate::inbound::http::dashboard::send_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        HrefBody,
        StatusBody,
        ChildBody,
        DoseBody,
        crate::inbound::http::accounts::SignUpRequestBody,
        crate::inbound::http::accounts::LoginRequestBody,
        crate::inbound::http::users::UpdateUserRequestBody,
        crate::inbound::http::users::ChildrenByEmailRequestBody,
        crate::inbound::http::children::CreateChildRequestBody,
        crate::inbound::http::children::UpdateChildRequestBody,
        crate::inbound::http::nurses::NurseProfileBody,
        crate::inbound::http::nurses::NurseBody,
        crate::inbound::http::nurses::CreateNurseRequestBody,
        crate::inbound::http::nurses::UpdateNurseRequestBody,
        crate::inbound::http::nurses::UpdateNurseResponseBody,
        crate::inbound::http::nurses::ReassignNurseRequestBody,
        crate::inbound::http::nurses::DeleteNurseRequestBody,
        crate::inbound::http::hospitals::HospitalBody,
        crate::inbound::http::hospitals::InventoryItemBody,
        crate::inbound::http::hospitals::CreateHospitalRequestBody,
        crate::inbound::http::hospitals::HospitalIdRequestBody,
        crate::inbound::http::hospitals::AddVaccineRequestBody,
        crate::inbound::http::vaccines::CatalogueVaccineBody,
        crate::inbound::http::vaccines::VaccineBody,
        crate::inbound::http::vaccinations::TrackerResponseBody,
        crate::inbound::http::dashboard::HospitalNurseCountBody,
        crate::inbound::http::dashboard::StockLevelBody,
        crate::inbound::http::dashboard::AdministeredCountBody,
        crate::inbound::http::dashboard::AdminStatisticsBody,
        crate::inbound::http::dashboard::ParentHomeBody,
        crate::inbound::http::dashboard::InventoryLineBody,
        crate::inbound::http::dashboard::NurseHomeBody,
        crate::inbound::http::dashboard::ContactRequestBody,
    )),
    tags(
        (name = "accounts", description = "Registration, login, and email verification"),
        (name = "users", description = "Parent account maintenance"),
        (name = "children", description = "Children registered for vaccination tracking"),
        (name = "nurses", description = "Nurse directory and administration"),
        (name = "hospitals", description = "Hospitals and their vaccine shelves"),
        (name = "vaccines", description = "Vaccine catalogue and stock"),
        (name = "vaccinations", description = "Administering doses and tracking progress"),
        (name = "dashboard", description = "Role dashboards and the contact form"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
