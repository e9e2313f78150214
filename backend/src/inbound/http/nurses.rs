//! Nurse-administration HTTP handlers.
//!
//! ```text
//! GET    /api/v1/nurse/{id}
//! GET    /api/v1/nurses
//! POST   /api/v1/nurse
//! PUT    /api/v1/nurse
//! PUT    /api/v1/nurse/hospital
//! DELETE /api/v1/nurse
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{
    CreateNurseRequest, NursePayload, NurseProfile, ReassignNurseRequest, UpdateNurseRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Public profile of a nurse with the hospital resolved to its name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NurseProfileBody {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Empty when the nurse has no assignment.
    pub hospital: String,
}

impl From<NurseProfile> for NurseProfileBody {
    fn from(value: NurseProfile) -> Self {
        Self {
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            hospital: value.hospital,
        }
    }
}

/// Nurse record in the admin directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NurseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "unverified")]
    pub status: String,
    #[schema(format = "uuid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
}

impl From<NursePayload> for NurseBody {
    fn from(value: NursePayload) -> Self {
        Self {
            id: value.id.to_string(),
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            status: value.status.as_str().to_owned(),
            hospital_id: value.hospital_id.map(|id| id.to_string()),
        }
    }
}

/// Request payload for creating a nurse account.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNurseRequestBody {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    #[schema(format = "uuid")]
    pub hospital_id: Option<String>,
}

/// Request payload for updating a nurse account.
///
/// `hospitalId` of `"0"` leaves the assignment unchanged.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNurseRequestBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hospital_id: Option<String>,
}

/// Response to a nurse update.
///
/// `href` appears only when a self-service edit dropped the account back to
/// unverified and the session was ended.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNurseResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Request payload for reassigning a nurse to a hospital.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignNurseRequestBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub hospital_id: String,
}

/// Request payload naming a nurse by id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNurseRequestBody {
    #[schema(format = "uuid")]
    pub id: String,
}

/// Fetch one nurse's public profile.
#[utoipa::path(
    get,
    path = "/api/v1/nurse/{id}",
    params(("id" = uuid::Uuid, Path, description = "Nurse id")),
    responses(
        (status = 200, description = "The nurse's profile", body = NurseProfileBody),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "No such nurse", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "getNurse",
    security(("SessionCookie" = []))
)]
#[get("/nurse/{id}")]
pub async fn get_nurse(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<NurseProfileBody>> {
    session.require_account()?;
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;

    let profile = state.nurses_query.get_profile(id).await?;

    Ok(web::Json(NurseProfileBody::from(profile)))
}

/// List all nurses for the admin directory.
#[utoipa::path(
    get,
    path = "/api/v1/nurses",
    responses(
        (status = 200, description = "All nurses ordered by first name", body = [NurseBody]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "listNurses",
    security(("SessionCookie" = []))
)]
#[get("/nurses")]
pub async fn list_nurses(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<NurseBody>>> {
    session.require_role(AccountRole::Admin)?;

    let nurses = state.nurses_query.list_nurses().await?;

    Ok(web::Json(nurses.into_iter().map(NurseBody::from).collect()))
}

/// Create a nurse account and mail its credentials.
#[utoipa::path(
    post,
    path = "/api/v1/nurse",
    request_body = CreateNurseRequestBody,
    responses(
        (status = 200, description = "Nurse created, credentials mailed"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "createNurse",
    security(("SessionCookie" = []))
)]
#[post("/nurse")]
pub async fn create_nurse(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateNurseRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Admin)?;
    let body = payload.into_inner();
    let hospital_id = body
        .hospital_id
        .map(|raw| parse_uuid(raw, FieldName::new("hospitalId")))
        .transpose()?;

    state
        .nurses
        .create_nurse(CreateNurseRequest {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            password: body.password,
            hospital_id,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

/// Update a nurse account.
///
/// Admins edit any nurse; a nurse may edit themselves. A self-service edit
/// that drops the account back to unverified ends the session and points
/// `href` at the verification page.
#[utoipa::path(
    put,
    path = "/api/v1/nurse",
    request_body = UpdateNurseRequestBody,
    responses(
        (status = 200, description = "Nurse updated", body = UpdateNurseResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin or nurse session", body = Error),
        (status = 404, description = "No such nurse", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "updateNurse",
    security(("SessionCookie" = []))
)]
#[put("/nurse")]
pub async fn update_nurse(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdateNurseRequestBody>,
) -> ApiResult<web::Json<UpdateNurseResponseBody>> {
    let account = session.require_role_in(&[AccountRole::Admin, AccountRole::Nurse])?;
    let body = payload.into_inner();
    let id = parse_uuid(body.id, FieldName::new("id"))?;

    let response = state
        .nurses
        .update_nurse(UpdateNurseRequest {
            id,
            actor_id: account.account_id,
            password: body.password,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            hospital_id: body.hospital_id,
        })
        .await?;

    if response.end_session {
        session.clear();
    }

    Ok(web::Json(UpdateNurseResponseBody {
        href: response.href,
    }))
}

/// Reassign a nurse to another hospital.
#[utoipa::path(
    put,
    path = "/api/v1/nurse/hospital",
    request_body = ReassignNurseRequestBody,
    responses(
        (status = 200, description = "Nurse reassigned"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 404, description = "No such nurse or hospital", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "reassignNurse",
    security(("SessionCookie" = []))
)]
#[put("/nurse/hospital")]
pub async fn reassign_nurse(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ReassignNurseRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Admin)?;
    let body = payload.into_inner();

    state
        .nurses
        .reassign_hospital(ReassignNurseRequest {
            id: parse_uuid(body.id, FieldName::new("id"))?,
            hospital_id: parse_uuid(body.hospital_id, FieldName::new("hospitalId"))?,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

/// Remove a nurse account.
#[utoipa::path(
    delete,
    path = "/api/v1/nurse",
    request_body = DeleteNurseRequestBody,
    responses(
        (status = 200, description = "Nurse removed"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["nurses"],
    operation_id = "deleteNurse",
    security(("SessionCookie" = []))
)]
#[delete("/nurse")]
pub async fn delete_nurse(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<DeleteNurseRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Admin)?;
    let id = parse_uuid(payload.into_inner().id, FieldName::new("id"))?;

    state.nurses.delete_nurse(id).await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

#[cfg(test)]
#[path = "nurses_tests.rs"]
mod tests;
