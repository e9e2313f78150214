//! Port backing the reminder worker's scan over doses and children.
//!
//! The worker reads the full dose schedule and child roster each scan and
//! tracks which (child, dose) pairs have already produced a reminder. The
//! notified set is append-only.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Child, Dose, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by reminder repository adapters.
    pub enum ReminderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "reminder repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "reminder repository query failed: {message}",
    }
}

/// Port for the reminder worker's reads and its notified-set writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// All doses in the schedule.
    async fn list_doses(&self) -> Result<Vec<Dose>, ReminderRepositoryError>;

    /// All registered children.
    async fn list_children(&self) -> Result<Vec<Child>, ReminderRepositoryError>;

    /// The parent account a child belongs to.
    async fn find_parent(&self, parent_id: Uuid)
        -> Result<Option<User>, ReminderRepositoryError>;

    /// Dose ids already reminded-about for this child.
    async fn notified_dose_ids(
        &self,
        child_id: Uuid,
    ) -> Result<Vec<Uuid>, ReminderRepositoryError>;

    /// Append a dose to the child's notified set.
    async fn record_notified(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<(), ReminderRepositoryError>;
}
