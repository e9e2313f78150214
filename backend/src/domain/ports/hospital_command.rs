//! Driving port for hospital and inventory mutations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;

/// Request to create a hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHospitalRequest {
    pub name: String,
}

/// Request to attach a vaccine to a hospital's shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddHospitalVaccineRequest {
    pub hospital_id: Uuid,
    pub vaccine_id: Uuid,
    pub stock: i32,
}

/// Outcome of attaching a vaccine to a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddHospitalVaccineResponse {
    pub already_linked: bool,
}

/// Request to restock one hospital/vaccine pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestockRequest {
    pub hospital_id: Uuid,
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

/// Driving port for hospital mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HospitalCommand: Send + Sync {
    /// Create a hospital with an empty shelf per existing vaccine.
    async fn create_hospital(&self, request: CreateHospitalRequest) -> Result<(), Error>;

    /// Attach a vaccine to a hospital, crediting the vaccine's global stock.
    ///
    /// An already-attached vaccine reports `already_linked` and changes
    /// nothing.
    async fn add_vaccine(
        &self,
        request: AddHospitalVaccineRequest,
    ) -> Result<AddHospitalVaccineResponse, Error>;

    /// Add a delivery to both the hospital shelf and the global stock.
    async fn restock(&self, request: RestockRequest) -> Result<(), Error>;
}
