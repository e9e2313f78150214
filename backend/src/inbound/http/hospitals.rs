//! Hospital-administration HTTP handlers.
//!
//! ```text
//! GET  /api/v1/hospital/{name}
//! GET  /api/v1/hospitals
//! POST /api/v1/hospital
//! POST /api/v1/hospital/nurses
//! POST /api/v1/hospital/vaccines
//! POST /api/v1/hospital/add-vaccine
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{
    AddHospitalVaccineRequest, CreateHospitalRequest, HospitalPayload, InventoryItem,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::nurses::NurseBody;
use crate::inbound::http::schemas::StatusBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Hospital record in the admin directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HospitalBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
}

impl From<HospitalPayload> for HospitalBody {
    fn from(value: HospitalPayload) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
        }
    }
}

/// One shelf line of a hospital's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemBody {
    pub denomination: String,
    pub quantity: i32,
}

impl From<InventoryItem> for InventoryItemBody {
    fn from(value: InventoryItem) -> Self {
        Self {
            denomination: value.denomination,
            quantity: value.quantity,
        }
    }
}

/// Request payload for creating a hospital.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHospitalRequestBody {
    pub name: String,
}

/// Request payload naming a hospital by id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HospitalIdRequestBody {
    #[schema(format = "uuid")]
    pub id: String,
}

/// Request payload for attaching a vaccine to a hospital's shelf.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddVaccineRequestBody {
    #[schema(format = "uuid")]
    pub hospital_id: String,
    #[schema(format = "uuid")]
    pub vaccine_id: String,
    /// Delivery credited to the vaccine's global stock on attachment.
    pub stock: i32,
}

/// Probe whether a hospital with this name exists.
///
/// The comparison ignores case so the admin form can reject duplicates
/// before submitting.
#[utoipa::path(
    get,
    path = "/api/v1/hospital/{name}",
    params(("name" = String, Path, description = "Hospital name to probe")),
    responses(
        (status = 200, description = "Existence verdict", body = StatusBody),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "hospitalExists",
    security(("SessionCookie" = []))
)]
#[get("/hospital/{name}")]
pub async fn hospital_exists(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<StatusBody>> {
    session.require_role(AccountRole::Admin)?;
    let name = path.into_inner();

    let exists = state.hospitals_query.hospital_exists(&name).await?;

    Ok(web::Json(if exists {
        StatusBody::exist()
    } else {
        StatusBody::not_exist()
    }))
}

/// List all hospitals for the admin directory.
#[utoipa::path(
    get,
    path = "/api/v1/hospitals",
    responses(
        (status = 200, description = "All hospitals ordered by name", body = [HospitalBody]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "listHospitals",
    security(("SessionCookie" = []))
)]
#[get("/hospitals")]
pub async fn list_hospitals(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<HospitalBody>>> {
    session.require_role(AccountRole::Admin)?;

    let hospitals = state.hospitals_query.list_hospitals().await?;

    Ok(web::Json(
        hospitals.into_iter().map(HospitalBody::from).collect(),
    ))
}

/// Create a hospital with an empty shelf per existing vaccine.
#[utoipa::path(
    post,
    path = "/api/v1/hospital",
    request_body = CreateHospitalRequestBody,
    responses(
        (status = 200, description = "Hospital created"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "createHospital",
    security(("SessionCookie" = []))
)]
#[post("/hospital")]
pub async fn create_hospital(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateHospitalRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Admin)?;

    state
        .hospitals
        .create_hospital(CreateHospitalRequest {
            name: payload.into_inner().name,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

/// The nurses assigned to one hospital.
#[utoipa::path(
    post,
    path = "/api/v1/hospital/nurses",
    request_body = HospitalIdRequestBody,
    responses(
        (status = 200, description = "The hospital's nurses", body = [NurseBody]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "hospitalNurses",
    security(("SessionCookie" = []))
)]
#[post("/hospital/nurses")]
pub async fn hospital_nurses(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<HospitalIdRequestBody>,
) -> ApiResult<web::Json<Vec<NurseBody>>> {
    session.require_role(AccountRole::Admin)?;
    let id = parse_uuid(payload.into_inner().id, FieldName::new("id"))?;

    let nurses = state.nurses_query.list_by_hospital(id).await?;

    Ok(web::Json(nurses.into_iter().map(NurseBody::from).collect()))
}

/// One hospital's inventory as denomination/quantity pairs.
#[utoipa::path(
    post,
    path = "/api/v1/hospital/vaccines",
    request_body = HospitalIdRequestBody,
    responses(
        (status = 200, description = "The hospital's shelf", body = [InventoryItemBody]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "hospitalVaccines",
    security(("SessionCookie" = []))
)]
#[post("/hospital/vaccines")]
pub async fn hospital_vaccines(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<HospitalIdRequestBody>,
) -> ApiResult<web::Json<Vec<InventoryItemBody>>> {
    session.require_role(AccountRole::Admin)?;
    let id = parse_uuid(payload.into_inner().id, FieldName::new("id"))?;

    let inventory = state.hospitals_query.inventory(id).await?;

    Ok(web::Json(
        inventory.into_iter().map(InventoryItemBody::from).collect(),
    ))
}

/// Attach a vaccine to a hospital's shelf.
///
/// An already-attached vaccine responds `{"status": "Exist"}` and changes
/// nothing; otherwise the shelf line is created empty and the delivery is
/// credited to the vaccine's global stock.
#[utoipa::path(
    post,
    path = "/api/v1/hospital/add-vaccine",
    request_body = AddVaccineRequestBody,
    responses(
        (status = 200, description = "Attached, or already on the shelf"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 404, description = "Unknown hospital or vaccine", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hospitals"],
    operation_id = "addHospitalVaccine",
    security(("SessionCookie" = []))
)]
#[post("/hospital/add-vaccine")]
pub async fn add_hospital_vaccine(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AddVaccineRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Nurse)?;
    let body = payload.into_inner();

    let response = state
        .hospitals
        .add_vaccine(AddHospitalVaccineRequest {
            hospital_id: parse_uuid(body.hospital_id, FieldName::new("hospitalId"))?,
            vaccine_id: parse_uuid(body.vaccine_id, FieldName::new("vaccineId"))?,
            stock: body.stock,
        })
        .await?;

    if response.already_linked {
        Ok(HttpResponse::Ok().json(StatusBody::exist()))
    } else {
        Ok(HttpResponse::Ok().json(json!({})))
    }
}

#[cfg(test)]
#[path = "hospitals_tests.rs"]
mod tests;
