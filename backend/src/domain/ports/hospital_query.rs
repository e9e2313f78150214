//! Driving port for hospital lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Hospital};

/// Hospital record payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalPayload {
    pub id: Uuid,
    pub name: String,
}

impl From<Hospital> for HospitalPayload {
    fn from(hospital: Hospital) -> Self {
        Self {
            id: hospital.id(),
            name: hospital.name().to_owned(),
        }
    }
}

/// One shelf line of a hospital's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub denomination: String,
    pub quantity: i32,
}

/// Driving port for hospital reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HospitalQuery: Send + Sync {
    /// Whether a hospital with this name exists, compared case-insensitively.
    async fn hospital_exists(&self, name: &str) -> Result<bool, Error>;

    /// All hospitals ordered by name.
    async fn list_hospitals(&self) -> Result<Vec<HospitalPayload>, Error>;

    /// One hospital's inventory as denomination/quantity pairs, ordered by
    /// denomination.
    async fn inventory(&self, hospital_id: Uuid) -> Result<Vec<InventoryItem>, Error>;
}
