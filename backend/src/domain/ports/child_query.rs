//! Driving port for child lookups.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Child, Error};

/// Child record payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildPayload {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub parent_id: Uuid,
}

impl From<Child> for ChildPayload {
    fn from(child: Child) -> Self {
        Self {
            id: child.id(),
            first_name: child.first_name().as_ref().to_owned(),
            last_name: child.last_name().as_ref().to_owned(),
            birthdate: child.birthdate(),
            parent_id: child.parent_id(),
        }
    }
}

/// Driving port for child reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChildQuery: Send + Sync {
    /// Fetch one child record.
    async fn get_child(&self, id: Uuid) -> Result<ChildPayload, Error>;

    /// The children of the parent account holding this email address.
    async fn children_for_parent_email(
        &self,
        email: &str,
    ) -> Result<Vec<ChildPayload>, Error>;
}
