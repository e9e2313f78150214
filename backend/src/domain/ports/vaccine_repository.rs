//! Port for vaccine catalogue and dose schedule persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Dose, Vaccine};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by vaccine repository adapters.
    pub enum VaccineRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "vaccine repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "vaccine repository query failed: {message}",
    }
}

/// Port for reading vaccines and doses and adjusting global stock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccineRepository: Send + Sync {
    /// Fetch a vaccine by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, VaccineRepositoryError>;

    /// All vaccines ordered by denomination.
    async fn list(&self) -> Result<Vec<Vaccine>, VaccineRepositoryError>;

    /// Add `delta` to a vaccine's global stock count.
    async fn adjust_stock(&self, id: Uuid, delta: i32) -> Result<(), VaccineRepositoryError>;

    /// Fetch a dose by identifier.
    async fn find_dose_by_id(&self, id: Uuid) -> Result<Option<Dose>, VaccineRepositoryError>;

    /// All doses ordered by denomination.
    async fn list_doses(&self) -> Result<Vec<Dose>, VaccineRepositoryError>;

    /// The doses of one vaccine, ordered by denomination.
    async fn list_doses_for_vaccine(
        &self,
        vaccine_id: Uuid,
    ) -> Result<Vec<Dose>, VaccineRepositoryError>;
}
