//! Driving port for recording administered doses.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;

/// Request to record a dose administered at a hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministerDoseRequest {
    pub hospital_id: Uuid,
    pub child_id: Uuid,
    pub dose_id: Uuid,
}

/// Outcome of an administration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdministerDoseResponse {
    /// The child already had this dose on record; nothing changed.
    pub already_administered: bool,
}

/// Driving port for vaccination writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccinationCommand: Send + Sync {
    /// Record a dose for a child and decrement both the vaccine stock and
    /// the administering hospital's inventory line.
    async fn administer_dose(
        &self,
        request: AdministerDoseRequest,
    ) -> Result<AdministerDoseResponse, Error>;
}
