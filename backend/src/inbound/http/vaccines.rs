//! Vaccine-catalogue HTTP handlers.
//!
//! ```text
//! GET /api/v1/vaccine/{id}
//! GET /api/v1/vaccines
//! PUT /api/v1/hospital/{hospitalId}/vaccine/{vaccineId}/{quantity}
//! ```

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{RestockRequest, VaccinePayload, VaccineView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Catalogue view of a vaccine, stock withheld.
///
/// `doses` carries `[denomination, term]` pairs ordered by denomination,
/// matching the schedule table the frontend renders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueVaccineBody {
    pub denomination: String,
    pub description: String,
    #[schema(value_type = Vec<Object>)]
    pub doses: Vec<(String, i32)>,
}

/// Full vaccine record, administrators only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaccineBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub denomination: String,
    pub description: String,
    pub stock: i32,
}

impl From<VaccinePayload> for VaccineBody {
    fn from(value: VaccinePayload) -> Self {
        Self {
            id: value.id.to_string(),
            denomination: value.denomination,
            description: value.description,
            stock: value.stock,
        }
    }
}

/// Fetch one vaccine shaped for the caller's role.
///
/// Parents and nurses receive the catalogue view with the dose schedule;
/// administrators receive the full record including global stock.
#[utoipa::path(
    get,
    path = "/api/v1/vaccine/{id}",
    params(("id" = uuid::Uuid, Path, description = "Vaccine id")),
    responses(
        (status = 200, description = "The vaccine, shaped by role", body = CatalogueVaccineBody),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "No such vaccine", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["vaccines"],
    operation_id = "getVaccine",
    security(("SessionCookie" = []))
)]
#[get("/vaccine/{id}")]
pub async fn get_vaccine(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let account = session.require_account()?;
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;

    let view = state.vaccines_query.get_vaccine(id, account.role).await?;

    Ok(match view {
        VaccineView::Catalogue(catalogue) => HttpResponse::Ok().json(CatalogueVaccineBody {
            denomination: catalogue.denomination,
            description: catalogue.description,
            doses: catalogue
                .doses
                .into_iter()
                .map(|dose| (dose.denomination, dose.term))
                .collect(),
        }),
        VaccineView::Full(payload) => HttpResponse::Ok().json(VaccineBody::from(payload)),
    })
}

/// List all vaccines with their global stock.
#[utoipa::path(
    get,
    path = "/api/v1/vaccines",
    responses(
        (status = 200, description = "All vaccines ordered by denomination", body = [VaccineBody]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["vaccines"],
    operation_id = "listVaccines",
    security(("SessionCookie" = []))
)]
#[get("/vaccines")]
pub async fn list_vaccines(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<VaccineBody>>> {
    session.require_role(AccountRole::Admin)?;

    let vaccines = state.vaccines_query.list_vaccines().await?;

    Ok(web::Json(
        vaccines.into_iter().map(VaccineBody::from).collect(),
    ))
}

/// Record a stock delivery for one hospital/vaccine pair.
///
/// The quantity is added to both the hospital's shelf and the vaccine's
/// global stock.
#[utoipa::path(
    put,
    path = "/api/v1/hospital/{hospitalId}/vaccine/{vaccineId}/{quantity}",
    params(
        ("hospitalId" = uuid::Uuid, Path, description = "Receiving hospital"),
        ("vaccineId" = uuid::Uuid, Path, description = "Delivered vaccine"),
        ("quantity" = i32, Path, description = "Units delivered")
    ),
    responses(
        (status = 200, description = "Delivery recorded"),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 404, description = "Unknown hospital or vaccine", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["vaccines"],
    operation_id = "restock",
    security(("SessionCookie" = []))
)]
#[put("/hospital/{hospitalId}/vaccine/{vaccineId}/{quantity}")]
pub async fn restock(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String, i32)>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Nurse)?;
    let (hospital_id, vaccine_id, quantity) = path.into_inner();

    state
        .hospitals
        .restock(RestockRequest {
            hospital_id: parse_uuid(hospital_id, FieldName::new("hospitalId"))?,
            vaccine_id: parse_uuid(vaccine_id, FieldName::new("vaccineId"))?,
            quantity,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

#[cfg(test)]
#[path = "vaccines_tests.rs"]
mod tests;
