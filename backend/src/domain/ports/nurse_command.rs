//! Driving port for nurse account administration.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;

/// Request to create a nurse account on an admin's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNurseRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub hospital_id: Option<Uuid>,
}

/// Request to update a nurse account.
///
/// `actor_id` is the session account performing the update; when it matches
/// the nurse being updated the flow treats this as self-service. The
/// password is rehashed on every update. A `hospital_id` of `"0"` leaves the
/// assignment unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNurseRequest {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hospital_id: Option<String>,
}

/// Outcome of a nurse update.
///
/// `href` is present only for self-service updates; `end_session` asks the
/// caller to drop the session because the nurse must re-verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNurseResponse {
    pub href: Option<String>,
    pub end_session: bool,
}

/// Request to move a nurse to another hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignNurseRequest {
    pub id: Uuid,
    pub hospital_id: Uuid,
}

/// Driving port for nurse account mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NurseCommand: Send + Sync {
    /// Create an unverified nurse and mail their credentials.
    async fn create_nurse(&self, request: CreateNurseRequest) -> Result<(), Error>;

    /// Update a nurse account, mailing fresh credentials or a verification
    /// link as the outcome requires.
    async fn update_nurse(
        &self,
        request: UpdateNurseRequest,
    ) -> Result<UpdateNurseResponse, Error>;

    /// Reassign a nurse to a hospital.
    async fn reassign_hospital(&self, request: ReassignNurseRequest) -> Result<(), Error>;

    /// Remove a nurse account; deleting an absent nurse succeeds.
    async fn delete_nurse(&self, id: Uuid) -> Result<(), Error>;
}
