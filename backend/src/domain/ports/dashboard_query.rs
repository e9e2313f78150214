//! Driving port for the role-specific landing pages.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ChildPayload, DoseAdministeredCount, DosePayload, HospitalInventoryLine, HospitalNurseCount,
};
use crate::domain::{Error, StockLevel};

/// Stock figure for one vaccine with its classified level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineStockStatus {
    pub denomination: String,
    pub stock: i32,
    pub status: StockLevel,
}

/// Aggregate counters for the administrator dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStatistics {
    pub nurses: i64,
    /// Registered parent accounts, the administrator excluded.
    pub parents: i64,
    pub children: i64,
    /// Nurse head-count per hospital, ordered by hospital name.
    pub nurses_per_hospital: Vec<HospitalNurseCount>,
    /// Stock per vaccine, ordered by denomination.
    pub stock_levels: Vec<VaccineStockStatus>,
    /// Children vaccinated per dose, ordered by denomination.
    pub administered: Vec<DoseAdministeredCount>,
}

/// Landing-page data for a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentHome {
    pub children: Vec<ChildPayload>,
    /// The full dose schedule, ordered by denomination.
    pub doses: Vec<DosePayload>,
}

/// Landing-page data for a nurse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NurseHome {
    /// Empty when the nurse has no hospital assignment.
    pub hospital_name: String,
    /// The assigned hospital's inventory, ordered by denomination.
    pub inventory: Vec<HospitalInventoryLine>,
    /// Every registered child, ordered by first name.
    pub children: Vec<ChildPayload>,
    /// The full dose schedule, ordered by denomination.
    pub doses: Vec<DosePayload>,
}

/// Driving port for dashboard reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Counters and breakdowns for the administrator dashboard.
    async fn statistics(&self) -> Result<AdminStatistics, Error>;

    /// A parent's children alongside the dose schedule.
    async fn parent_home(&self, parent_id: Uuid) -> Result<ParentHome, Error>;

    /// The nurse's hospital, its inventory, and the child roster.
    async fn nurse_home(&self, nurse_id: Uuid) -> Result<NurseHome, Error>;
}
