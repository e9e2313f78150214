//! Vaccines, their dose schedules, and stock classification.

use std::fmt;

use uuid::Uuid;

/// Validation failures for vaccine and dose data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaccineValidationError {
    /// The denomination was empty or whitespace.
    EmptyDenomination,
    /// The description was empty or whitespace.
    EmptyDescription,
    /// Stock counts cannot be negative.
    NegativeStock,
    /// Dose terms count days from birth and cannot be negative.
    NegativeTerm,
}

impl fmt::Display for VaccineValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDenomination => write!(f, "denomination must not be empty"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::NegativeStock => write!(f, "stock must not be negative"),
            Self::NegativeTerm => write!(f, "term must not be negative"),
        }
    }
}

impl std::error::Error for VaccineValidationError {}

/// Coarse stock bands surfaced on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Adequate,
    Surplus,
}

impl StockLevel {
    const LOW_BELOW: i32 = 500;
    const SURPLUS_ABOVE: i32 = 2000;

    /// Classify a global stock count.
    pub fn classify(stock: i32) -> Self {
        if stock < Self::LOW_BELOW {
            Self::Low
        } else if stock > Self::SURPLUS_ABOVE {
            Self::Surplus
        } else {
            Self::Adequate
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Adequate => "Adequate",
            Self::Surplus => "Surplus",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vaccine with its catalogue entry and global stock count.
///
/// `stock` aggregates quantities across all hospitals; per-hospital counts
/// live in [`crate::domain::HospitalVaccine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vaccine {
    id: Uuid,
    denomination: String,
    description: String,
    stock: i32,
}

impl Vaccine {
    /// Assemble a vaccine from validated components.
    pub fn new(
        id: Uuid,
        denomination: String,
        description: String,
        stock: i32,
    ) -> Result<Self, VaccineValidationError> {
        let denomination = denomination.trim().to_owned();
        if denomination.is_empty() {
            return Err(VaccineValidationError::EmptyDenomination);
        }
        let description = description.trim().to_owned();
        if description.is_empty() {
            return Err(VaccineValidationError::EmptyDescription);
        }
        if stock < 0 {
            return Err(VaccineValidationError::NegativeStock);
        }
        Ok(Self {
            id,
            denomination,
            description,
            stock,
        })
    }

    /// Create a vaccine with a random identifier.
    pub fn create(
        denomination: String,
        description: String,
        stock: i32,
    ) -> Result<Self, VaccineValidationError> {
        Self::new(Uuid::new_v4(), denomination, description, stock)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn denomination(&self) -> &str {
        self.denomination.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }
}

/// One scheduled dose of a vaccine.
///
/// `term` is the child's age in days at which the dose falls due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dose {
    id: Uuid,
    denomination: String,
    term: i32,
    vaccine_id: Uuid,
}

impl Dose {
    /// Assemble a dose from validated components.
    pub fn new(
        id: Uuid,
        denomination: String,
        term: i32,
        vaccine_id: Uuid,
    ) -> Result<Self, VaccineValidationError> {
        let denomination = denomination.trim().to_owned();
        if denomination.is_empty() {
            return Err(VaccineValidationError::EmptyDenomination);
        }
        if term < 0 {
            return Err(VaccineValidationError::NegativeTerm);
        }
        Ok(Self {
            id,
            denomination,
            term,
            vaccine_id,
        })
    }

    /// Create a dose with a random identifier.
    pub fn create(
        denomination: String,
        term: i32,
        vaccine_id: Uuid,
    ) -> Result<Self, VaccineValidationError> {
        Self::new(Uuid::new_v4(), denomination, term, vaccine_id)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn denomination(&self) -> &str {
        self.denomination.as_str()
    }

    pub fn term(&self) -> i32 {
        self.term
    }

    pub fn vaccine_id(&self) -> Uuid {
        self.vaccine_id
    }
}
