//! Driving port for nurse lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccountStatus, Error, Nurse};

/// Public profile of a nurse, with the hospital resolved to its name.
///
/// `hospital` is empty when the nurse has no assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NurseProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hospital: String,
}

/// Nurse record payload for the admin directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NursePayload {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: AccountStatus,
    pub hospital_id: Option<Uuid>,
}

impl From<Nurse> for NursePayload {
    fn from(nurse: Nurse) -> Self {
        Self {
            id: nurse.id(),
            email: nurse.email().as_ref().to_owned(),
            first_name: nurse.first_name().as_ref().to_owned(),
            last_name: nurse.last_name().as_ref().to_owned(),
            status: nurse.status(),
            hospital_id: nurse.hospital_id(),
        }
    }
}

/// Driving port for nurse reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NurseQuery: Send + Sync {
    /// Fetch one nurse's public profile.
    async fn get_profile(&self, id: Uuid) -> Result<NurseProfile, Error>;

    /// All nurses ordered by first name.
    async fn list_nurses(&self) -> Result<Vec<NursePayload>, Error>;

    /// The nurses assigned to one hospital.
    async fn list_by_hospital(&self, hospital_id: Uuid) -> Result<Vec<NursePayload>, Error>;
}
