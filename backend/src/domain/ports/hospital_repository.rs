//! Port for hospital and per-hospital inventory persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Hospital, HospitalVaccine};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by hospital repository adapters.
    pub enum HospitalRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "hospital repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "hospital repository query failed: {message}",
    }
}

/// One inventory row joined with its vaccine's denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalInventoryLine {
    pub denomination: String,
    pub hospital_id: Uuid,
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

/// Port for reading and writing hospitals and their vaccine shelves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HospitalRepository: Send + Sync {
    /// Insert a new hospital record.
    async fn insert(&self, hospital: &Hospital) -> Result<(), HospitalRepositoryError>;

    /// Fetch a hospital by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hospital>, HospitalRepositoryError>;

    /// Fetch a hospital by name, matching case-insensitively.
    async fn find_by_name(&self, name: &str)
        -> Result<Option<Hospital>, HospitalRepositoryError>;

    /// All hospitals ordered by name.
    async fn list(&self) -> Result<Vec<Hospital>, HospitalRepositoryError>;

    /// Insert an inventory row linking a vaccine to a hospital.
    async fn insert_link(&self, link: &HospitalVaccine) -> Result<(), HospitalRepositoryError>;

    /// Fetch the inventory row for one hospital/vaccine pair.
    async fn find_link(
        &self,
        hospital_id: Uuid,
        vaccine_id: Uuid,
    ) -> Result<Option<HospitalVaccine>, HospitalRepositoryError>;

    /// Add `delta` to the quantity of one inventory row. Absent rows are a
    /// no-op, mirroring the tolerant restock behaviour of the inventory flows.
    async fn adjust_link_quantity(
        &self,
        hospital_id: Uuid,
        vaccine_id: Uuid,
        delta: i32,
    ) -> Result<(), HospitalRepositoryError>;

    /// The hospital's inventory joined with denominations, ordered by
    /// denomination.
    async fn list_inventory(
        &self,
        hospital_id: Uuid,
    ) -> Result<Vec<HospitalInventoryLine>, HospitalRepositoryError>;
}
