//! Role dashboard HTTP handlers.
//!
//! ```text
//! GET  /api/v1/admin/statistics
//! GET  /api/v1/home
//! GET  /api/v1/nurse/home
//! POST /api/v1/contact
//! ```

use std::collections::BTreeMap;

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AccountRole;
use crate::domain::Error;
use crate::domain::ports::{AdminStatistics, ContactRequest, NurseHome, ParentHome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ChildBody, DoseBody, StatusBody};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Nurse head-count for one hospital.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HospitalNurseCountBody {
    pub hospital: String,
    pub nurses: i64,
}

/// Stock figure for one vaccine with its classified level.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelBody {
    pub denomination: String,
    pub stock: i32,
    /// `Low` below 500 units, `Surplus` above 2000, `Adequate` between.
    #[schema(example = "Adequate")]
    pub status: String,
}

/// Children vaccinated per dose.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdministeredCountBody {
    pub dose: String,
    pub children: i64,
}

/// Administrator dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatisticsBody {
    pub nurses: i64,
    /// Registered parent accounts, the administrator excluded.
    pub parents: i64,
    pub children: i64,
    pub nurses_per_hospital: Vec<HospitalNurseCountBody>,
    pub stock_levels: Vec<StockLevelBody>,
    pub administered: Vec<AdministeredCountBody>,
}

impl From<AdminStatistics> for AdminStatisticsBody {
    fn from(value: AdminStatistics) -> Self {
        Self {
            nurses: value.nurses,
            parents: value.parents,
            children: value.children,
            nurses_per_hospital: value
                .nurses_per_hospital
                .into_iter()
                .map(|count| HospitalNurseCountBody {
                    hospital: count.hospital_name,
                    nurses: count.nurses,
                })
                .collect(),
            stock_levels: value
                .stock_levels
                .into_iter()
                .map(|level| StockLevelBody {
                    denomination: level.denomination,
                    stock: level.stock,
                    status: level.status.as_str().to_owned(),
                })
                .collect(),
            administered: value
                .administered
                .into_iter()
                .map(|count| AdministeredCountBody {
                    dose: count.denomination,
                    children: count.children,
                })
                .collect(),
        }
    }
}

/// Parent landing-page payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentHomeBody {
    pub children: Vec<ChildBody>,
    pub doses: Vec<DoseBody>,
}

impl From<ParentHome> for ParentHomeBody {
    fn from(value: ParentHome) -> Self {
        Self {
            children: value.children.into_iter().map(ChildBody::from).collect(),
            doses: value.doses.into_iter().map(DoseBody::from).collect(),
        }
    }
}

/// One shelf line of the nurse's hospital inventory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLineBody {
    #[schema(format = "uuid")]
    pub hospital_id: String,
    #[schema(format = "uuid")]
    pub vaccine_id: String,
    pub quantity: i32,
}

/// Nurse landing-page payload.
///
/// `inventory` is keyed by vaccine denomination, which is how the recording
/// form looks shelf lines up.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NurseHomeBody {
    /// Empty when the nurse has no hospital assignment.
    pub hospital: String,
    #[schema(value_type = Object)]
    pub inventory: BTreeMap<String, InventoryLineBody>,
    pub children: Vec<ChildBody>,
    pub doses: Vec<DoseBody>,
}

impl From<NurseHome> for NurseHomeBody {
    fn from(value: NurseHome) -> Self {
        Self {
            hospital: value.hospital_name,
            inventory: value
                .inventory
                .into_iter()
                .map(|line| {
                    (
                        line.denomination,
                        InventoryLineBody {
                            hospital_id: line.hospital_id.to_string(),
                            vaccine_id: line.vaccine_id.to_string(),
                            quantity: line.quantity,
                        },
                    )
                })
                .collect(),
            children: value.children.into_iter().map(ChildBody::from).collect(),
            doses: value.doses.into_iter().map(DoseBody::from).collect(),
        }
    }
}

/// Request payload for the contact form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestBody {
    pub subject: String,
    pub message: String,
}

/// Counters and breakdowns for the administrator dashboard.
#[utoipa::path(
    get,
    path = "/api/v1/admin/statistics",
    responses(
        (status = 200, description = "Dashboard statistics", body = AdminStatisticsBody),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not an admin session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "adminStatistics",
    security(("SessionCookie" = []))
)]
#[get("/admin/statistics")]
pub async fn admin_statistics(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AdminStatisticsBody>> {
    session.require_role(AccountRole::Admin)?;

    let statistics = state.dashboard.statistics().await?;

    Ok(web::Json(AdminStatisticsBody::from(statistics)))
}

/// The signed-in parent's children alongside the dose schedule.
#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Parent landing-page data", body = ParentHomeBody),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a parent session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "parentHome",
    security(("SessionCookie" = []))
)]
#[get("/home")]
pub async fn parent_home(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ParentHomeBody>> {
    let account = session.require_role(AccountRole::Parent)?;

    let home = state.dashboard.parent_home(account.account_id).await?;

    Ok(web::Json(ParentHomeBody::from(home)))
}

/// The signed-in nurse's hospital inventory and the child roster.
#[utoipa::path(
    get,
    path = "/api/v1/nurse/home",
    responses(
        (status = 200, description = "Nurse landing-page data", body = NurseHomeBody),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not a nurse session", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "nurseHome",
    security(("SessionCookie" = []))
)]
#[get("/nurse/home")]
pub async fn nurse_home(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<NurseHomeBody>> {
    let account = session.require_role(AccountRole::Nurse)?;

    let home = state.dashboard.nurse_home(account.account_id).await?;

    Ok(web::Json(NurseHomeBody::from(home)))
}

/// Relay a contact-form message to the administrators' mailbox.
///
/// The sender's name and address come from the session rather than the
/// body, so a message always identifies the account that sent it.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequestBody,
    responses(
        (status = 200, description = "Message relayed", body = StatusBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "sendContact",
    security(("SessionCookie" = []))
)]
#[post("/contact")]
pub async fn send_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ContactRequestBody>,
) -> ApiResult<web::Json<StatusBody>> {
    let account = session.require_account()?;
    let body = payload.into_inner();

    state
        .accounts
        .send_contact(ContactRequest {
            account_id: account.account_id,
            role: account.role,
            subject: body.subject,
            message: body.message,
        })
        .await?;

    Ok(web::Json(StatusBody {
        status: "Message sent successfully, Thank you!.".to_owned(),
    }))
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
