//! Vaccination-recording HTTP handlers.
//!
//! ```text
//! GET /api/v1/hospital/{hospitalId}/child/{childId}/dose/{doseId}
//! GET /api/v1/dose/{id}/range/{range}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{AdministerDoseRequest, TrackerProjection};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::StatusBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Tracker projection for one dose over a day range.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackerResponseBody {
    /// Dose denomination.
    pub dose: String,
    /// Children due within the range.
    pub vaccination: i64,
}

impl From<TrackerProjection> for TrackerResponseBody {
    fn from(value: TrackerProjection) -> Self {
        Self {
            dose: value.dose,
            vaccination: value.vaccinations,
        }
    }
}

/// Record a dose administered to a child at a hospital.
///
/// A dose already on the child's record responds `{"status": "Exist"}` and
/// changes nothing; otherwise the dose is recorded and both the vaccine's
/// global stock and the hospital's shelf are decremented.
#[utoipa::path(
    get,
    path = "/api/v1/hospital/{hospitalId}/child/{childId}/dose/{doseId}",
    params(
        ("hospitalId" = uuid::Uuid, Path, description = "Administering hospital"),
        ("childId" = uuid::Uuid, Path, description = "Child receiving the dose"),
        ("doseId" = uuid::Uuid, Path, description = "Dose being administered")
    ),
    responses(
        (status = 200, description = "Recorded, or already on record"),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 404, description = "Unknown hospital, child, or dose", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["vaccinations"],
    operation_id = "administerDose",
    security(("SessionCookie" = []))
)]
#[get("/hospital/{hospitalId}/child/{childId}/dose/{doseId}")]
pub async fn administer_dose(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String, String)>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Nurse)?;
    let (hospital_id, child_id, dose_id) = path.into_inner();

    let response = state
        .vaccinations
        .administer_dose(AdministerDoseRequest {
            hospital_id: parse_uuid(hospital_id, FieldName::new("hospitalId"))?,
            child_id: parse_uuid(child_id, FieldName::new("childId"))?,
            dose_id: parse_uuid(dose_id, FieldName::new("doseId"))?,
        })
        .await?;

    if response.already_administered {
        Ok(HttpResponse::Ok().json(StatusBody::exist()))
    } else {
        Ok(HttpResponse::Ok().json(json!({})))
    }
}

/// Count the children falling due for a dose within a day range.
#[utoipa::path(
    get,
    path = "/api/v1/dose/{id}/range/{range}",
    params(
        ("id" = uuid::Uuid, Path, description = "Dose id"),
        ("range" = i32, Path, description = "Days ahead (may be negative)")
    ),
    responses(
        (status = 200, description = "Due-count projection", body = TrackerResponseBody),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 404, description = "Unknown dose", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["vaccinations"],
    operation_id = "vaccinationTracker",
    security(("SessionCookie" = []))
)]
#[get("/dose/{id}/range/{range}")]
pub async fn vaccination_tracker(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, i32)>,
) -> ApiResult<web::Json<TrackerResponseBody>> {
    session.require_role(AccountRole::Nurse)?;
    let (dose_id, range) = path.into_inner();
    let dose_id = parse_uuid(dose_id, FieldName::new("id"))?;

    let projection = state.vaccinations_query.tracker(dose_id, range).await?;

    Ok(web::Json(TrackerResponseBody::from(projection)))
}

#[cfg(test)]
#[path = "vaccinations_tests.rs"]
mod tests;
