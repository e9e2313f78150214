//! Hospitals and their per-hospital vaccine inventory.

use std::fmt;

use uuid::Uuid;

/// Validation failures for hospital data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HospitalValidationError {
    /// The hospital name was empty or whitespace.
    EmptyName,
}

impl fmt::Display for HospitalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "hospital name must not be empty"),
        }
    }
}

impl std::error::Error for HospitalValidationError {}

/// A hospital that stocks vaccines and hosts nurses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hospital {
    id: Uuid,
    name: String,
}

impl Hospital {
    /// Assemble a hospital from validated components.
    pub fn new(id: Uuid, name: String) -> Result<Self, HospitalValidationError> {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(HospitalValidationError::EmptyName);
        }
        Ok(Self { id, name })
    }

    /// Create a hospital with a random identifier.
    pub fn create(name: String) -> Result<Self, HospitalValidationError> {
        Self::new(Uuid::new_v4(), name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Stock of one vaccine at one hospital.
///
/// A row exists only once the hospital has linked the vaccine; linking starts
/// the count at zero and restocking increments it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalVaccine {
    id: Uuid,
    hospital_id: Uuid,
    vaccine_id: Uuid,
    quantity: i32,
}

impl HospitalVaccine {
    pub fn new(id: Uuid, hospital_id: Uuid, vaccine_id: Uuid, quantity: i32) -> Self {
        Self {
            id,
            hospital_id,
            vaccine_id,
            quantity,
        }
    }

    /// Link a vaccine to a hospital with an empty shelf.
    pub fn link(hospital_id: Uuid, vaccine_id: Uuid) -> Self {
        Self::new(Uuid::new_v4(), hospital_id, vaccine_id, 0)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn hospital_id(&self) -> Uuid {
        self.hospital_id
    }

    pub fn vaccine_id(&self) -> Uuid {
        self.vaccine_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
