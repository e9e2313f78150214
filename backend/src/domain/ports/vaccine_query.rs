//! Driving port for vaccine catalogue reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccountRole, Dose, Error, Vaccine};

/// Full vaccine record payload, stock included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinePayload {
    pub id: Uuid,
    pub denomination: String,
    pub description: String,
    pub stock: i32,
}

impl From<Vaccine> for VaccinePayload {
    fn from(vaccine: Vaccine) -> Self {
        Self {
            id: vaccine.id(),
            denomination: vaccine.denomination().to_owned(),
            description: vaccine.description().to_owned(),
            stock: vaccine.stock(),
        }
    }
}

/// Dose record payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosePayload {
    pub id: Uuid,
    pub denomination: String,
    pub term: i32,
    pub vaccine_id: Uuid,
}

impl From<Dose> for DosePayload {
    fn from(dose: Dose) -> Self {
        Self {
            id: dose.id(),
            denomination: dose.denomination().to_owned(),
            term: dose.term(),
            vaccine_id: dose.vaccine_id(),
        }
    }
}

/// Dose line in the catalogue view of a vaccine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseBrief {
    pub denomination: String,
    pub term: i32,
}

/// Catalogue view of a vaccine for parents and nurses, without stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineCatalogueView {
    pub denomination: String,
    pub description: String,
    pub doses: Vec<DoseBrief>,
}

/// Vaccine record shaped by the caller's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaccineView {
    /// Denomination, description, and dose schedule only.
    Catalogue(VaccineCatalogueView),
    /// The full record, administrators only.
    Full(VaccinePayload),
}

/// Driving port for vaccine reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccineQuery: Send + Sync {
    /// Fetch a vaccine shaped for the caller: the full record for admins,
    /// the catalogue view for everyone else.
    async fn get_vaccine(&self, id: Uuid, role: AccountRole) -> Result<VaccineView, Error>;

    /// All vaccines with stock, ordered by denomination.
    async fn list_vaccines(&self) -> Result<Vec<VaccinePayload>, Error>;
}
