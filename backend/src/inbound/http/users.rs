//! Parent-account HTTP handlers.
//!
//! ```text
//! GET  /api/v1/user/{email}
//! PUT  /api/v1/user
//! POST /api/v1/user/children
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::UpdateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ChildBody, HrefBody, StatusBody};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request payload for updating the signed-in parent's account.
///
/// The password is always rehashed; omitted optional fields keep their
/// current values.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequestBody {
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request payload naming a parent account by email.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenByEmailRequestBody {
    pub email: String,
}

/// Whether an address belongs to any account.
///
/// Unauthenticated; the sign-up form probes before submitting.
#[utoipa::path(
    get,
    path = "/api/v1/user/{email}",
    params(("email" = String, Path, description = "Address to probe")),
    responses(
        (status = 200, description = "Probe result", body = StatusBody),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "probeAccount",
    security([])
)]
#[get("/user/{email}")]
pub async fn probe_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StatusBody>> {
    let email = path.into_inner();

    let exists = state.accounts_query.account_exists(&email).await?;

    Ok(web::Json(if exists {
        StatusBody::exist()
    } else {
        StatusBody::not_exist()
    }))
}

/// Update the signed-in parent's account.
///
/// A changed email drops the account back to unverified, ends the session,
/// and points `href` at the verification page; otherwise `href` is empty.
#[utoipa::path(
    put,
    path = "/api/v1/user",
    request_body = UpdateUserRequestBody,
    responses(
        (status = 200, description = "Account updated", body = HrefBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a parent session", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser",
    security(("SessionCookie" = []))
)]
#[put("/user")]
pub async fn update_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdateUserRequestBody>,
) -> ApiResult<web::Json<HrefBody>> {
    let account = session.require_role(AccountRole::Parent)?;
    let body = payload.into_inner();

    let response = state
        .accounts
        .update_user(UpdateUserRequest {
            account_id: account.account_id,
            password: body.password,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;

    if response.end_session {
        session.clear();
    }

    Ok(web::Json(HrefBody {
        href: response.href,
    }))
}

/// The children registered under a parent's email address.
///
/// Nurses look a family up at the desk before recording a visit.
#[utoipa::path(
    post,
    path = "/api/v1/user/children",
    request_body = ChildrenByEmailRequestBody,
    responses(
        (status = 200, description = "The parent's children", body = [ChildBody]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 404, description = "No such parent", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "childrenByEmail",
    security(("SessionCookie" = []))
)]
#[post("/user/children")]
pub async fn children_by_email(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ChildrenByEmailRequestBody>,
) -> ApiResult<web::Json<Vec<ChildBody>>> {
    session.require_role(AccountRole::Nurse)?;

    let children = state
        .children_query
        .children_for_parent_email(&payload.email)
        .await?;

    Ok(web::Json(
        children.into_iter().map(ChildBody::from).collect(),
    ))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
