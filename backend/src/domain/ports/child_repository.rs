//! Port for child records and their administered-dose sets.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Child;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by child repository adapters.
    pub enum ChildRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "child repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "child repository query failed: {message}",
    }
}

/// Administered-children head-count for one dose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseAdministeredCount {
    pub denomination: String,
    pub children: i64,
}

/// Port for reading and writing children and their vaccination records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChildRepository: Send + Sync {
    /// Insert a new child record.
    async fn insert(&self, child: &Child) -> Result<(), ChildRepositoryError>;

    /// Persist changes to an existing child record.
    async fn update(&self, child: &Child) -> Result<(), ChildRepositoryError>;

    /// Remove a child record; absent ids are a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), ChildRepositoryError>;

    /// Fetch a child by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, ChildRepositoryError>;

    /// All children ordered by first name.
    async fn list(&self) -> Result<Vec<Child>, ChildRepositoryError>;

    /// The children of one parent.
    async fn list_by_parent(&self, parent_id: Uuid)
        -> Result<Vec<Child>, ChildRepositoryError>;

    /// Total number of child rows.
    async fn count(&self) -> Result<i64, ChildRepositoryError>;

    /// Whether the dose is already in the child's administered set.
    async fn is_administered(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<bool, ChildRepositoryError>;

    /// Append a dose to the child's administered set.
    async fn record_administered(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<(), ChildRepositoryError>;

    /// Administered-children counts per dose, ordered by denomination. Doses
    /// never administered appear with a zero count.
    async fn count_administered_per_dose(
        &self,
    ) -> Result<Vec<DoseAdministeredCount>, ChildRepositoryError>;
}
