//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, Nurse, Child, Hospital, Vaccine, Dose — persistence-backed
//!   aggregates with validated constructors.
//! - EmailAddress, PersonName, VerificationToken, LoginCredentials —
//!   validated value types shared across accounts.
//! - OutboundEmail and the `email` builders — notification payloads.
//! - TraceId — request/scan correlation identifier.

pub mod account;
pub mod account_service;
pub mod auth;
pub mod child;
pub mod child_service;
pub mod dashboard_service;
pub mod email;
pub mod error;
pub mod hospital;
pub mod hospital_service;
pub mod nurse;
pub mod nurse_admin_service;
pub mod password;
pub mod ports;
pub mod reminder;
pub mod reminder_worker;
mod service_support;
pub mod trace_id;
pub mod user;
pub mod vaccination_service;
pub mod vaccine;
pub mod vaccine_service;

pub use self::account::{
    AccountRole, AccountStatus, AccountValidationError, EmailAddress, PersonName,
    VerificationToken,
};
pub use self::account_service::AccountService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::child::Child;
pub use self::child_service::ChildService;
pub use self::dashboard_service::DashboardService;
pub use self::email::{AppLinks, OutboundEmail};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::hospital::{Hospital, HospitalValidationError, HospitalVaccine};
pub use self::hospital_service::HospitalService;
pub use self::nurse::Nurse;
pub use self::nurse_admin_service::NurseAdminService;
pub use self::password::{PasswordHashError, hash_password, verify_password};
pub use self::reminder::ReminderWindow;
pub use self::reminder_worker::{
    ReminderScanOutcome, ReminderSleeper, ReminderWorker, ReminderWorkerConfig, TokioSleeper,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
pub use self::vaccination_service::VaccinationService;
pub use self::vaccine::{Dose, StockLevel, Vaccine, VaccineValidationError};
pub use self::vaccine_service::VaccineService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
