//! Child-record HTTP handlers.
//!
//! ```text
//! GET    /api/v1/child/{id}
//! POST   /api/v1/child
//! PUT    /api/v1/child
//! DELETE /api/v1/child/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{CreateChildRequest, UpdateChildRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ChildBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_date, parse_uuid};

/// Request payload for registering a child.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildRequestBody {
    pub first_name: String,
    pub last_name: String,
    #[schema(format = "date")]
    pub birthdate: String,
}

/// Request payload for updating a child's editable fields.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChildRequestBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub first_name: String,
    #[schema(format = "date")]
    pub birthdate: String,
}

/// Fetch one child record.
#[utoipa::path(
    get,
    path = "/api/v1/child/{id}",
    params(("id" = uuid::Uuid, Path, description = "Child id")),
    responses(
        (status = 200, description = "The child record", body = ChildBody),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "No such child", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["children"],
    operation_id = "getChild",
    security(("SessionCookie" = []))
)]
#[get("/child/{id}")]
pub async fn get_child(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ChildBody>> {
    session.require_account()?;
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;

    let child = state.children_query.get_child(id).await?;

    Ok(web::Json(ChildBody::from(child)))
}

/// Register a child under the signed-in parent.
#[utoipa::path(
    post,
    path = "/api/v1/child",
    request_body = CreateChildRequestBody,
    responses(
        (status = 200, description = "Child registered"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a parent session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["children"],
    operation_id = "createChild",
    security(("SessionCookie" = []))
)]
#[post("/child")]
pub async fn create_child(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateChildRequestBody>,
) -> ApiResult<HttpResponse> {
    let account = session.require_role(AccountRole::Parent)?;
    let body = payload.into_inner();
    let birthdate = parse_date(body.birthdate, FieldName::new("birthdate"))?;

    state
        .children
        .create_child(CreateChildRequest {
            parent_id: account.account_id,
            first_name: body.first_name,
            last_name: body.last_name,
            birthdate,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

/// Update a child's first name and birthdate.
#[utoipa::path(
    put,
    path = "/api/v1/child",
    request_body = UpdateChildRequestBody,
    responses(
        (status = 200, description = "Child updated"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a parent session", body = Error),
        (status = 404, description = "No such child", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["children"],
    operation_id = "updateChild",
    security(("SessionCookie" = []))
)]
#[put("/child")]
pub async fn update_child(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdateChildRequestBody>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Parent)?;
    let body = payload.into_inner();
    let id = parse_uuid(body.id, FieldName::new("id"))?;
    let birthdate = parse_date(body.birthdate, FieldName::new("birthdate"))?;

    state
        .children
        .update_child(UpdateChildRequest {
            id,
            first_name: body.first_name,
            birthdate,
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

/// Remove a child record.
#[utoipa::path(
    delete,
    path = "/api/v1/child/{id}",
    params(("id" = uuid::Uuid, Path, description = "Child id")),
    responses(
        (status = 200, description = "Child removed"),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a parent session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["children"],
    operation_id = "deleteChild",
    security(("SessionCookie" = []))
)]
#[delete("/child/{id}")]
pub async fn delete_child(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_role(AccountRole::Parent)?;
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;

    state.children.delete_child(id).await?;

    Ok(HttpResponse::Ok().json(json!({})))
}

#[cfg(test)]
#[path = "children_tests.rs"]
mod tests;
