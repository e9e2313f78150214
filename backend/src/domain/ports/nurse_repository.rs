//! Port for nurse account persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EmailAddress, Nurse};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by nurse repository adapters.
    pub enum NurseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "nurse repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "nurse repository query failed: {message}",
    }
}

/// Nurse head-count for one hospital, used by the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalNurseCount {
    pub hospital_name: String,
    pub nurses: i64,
}

/// Port for reading and writing nurse accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NurseRepository: Send + Sync {
    /// Insert a new nurse record.
    async fn insert(&self, nurse: &Nurse) -> Result<(), NurseRepositoryError>;

    /// Persist changes to an existing nurse record.
    async fn update(&self, nurse: &Nurse) -> Result<(), NurseRepositoryError>;

    /// Remove a nurse record; absent ids are a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), NurseRepositoryError>;

    /// Fetch a nurse by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Nurse>, NurseRepositoryError>;

    /// Fetch a nurse by normalised email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Nurse>, NurseRepositoryError>;

    /// Fetch the nurse currently holding a verification token.
    async fn find_by_token(&self, token: &str) -> Result<Option<Nurse>, NurseRepositoryError>;

    /// All nurses ordered by first name.
    async fn list(&self) -> Result<Vec<Nurse>, NurseRepositoryError>;

    /// Nurses assigned to one hospital.
    async fn list_by_hospital(&self, hospital_id: Uuid)
        -> Result<Vec<Nurse>, NurseRepositoryError>;

    /// Total number of nurse rows.
    async fn count(&self) -> Result<i64, NurseRepositoryError>;

    /// Nurse head-counts per hospital, ordered by hospital name. Hospitals
    /// without nurses appear with a zero count.
    async fn count_by_hospital(&self) -> Result<Vec<HospitalNurseCount>, NurseRepositoryError>;
}
