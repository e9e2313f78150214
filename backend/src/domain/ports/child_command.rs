//! Driving port for child record mutations.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Error;

/// Request to register a child under the signed-in parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChildRequest {
    pub parent_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
}

/// Request to update a child's first name and birthdate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateChildRequest {
    pub id: Uuid,
    pub first_name: String,
    pub birthdate: NaiveDate,
}

/// Driving port for child mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChildCommand: Send + Sync {
    /// Register a new child.
    async fn create_child(&self, request: CreateChildRequest) -> Result<(), Error>;

    /// Update an existing child's editable fields.
    async fn update_child(&self, request: UpdateChildRequest) -> Result<(), Error>;

    /// Remove a child record; deleting an absent child succeeds.
    async fn delete_child(&self, id: Uuid) -> Result<(), Error>;
}
