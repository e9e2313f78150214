//! Driving port for the vaccination tracker projection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;

/// How many children fall due for a dose within a day range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerProjection {
    pub dose: String,
    pub vaccinations: i64,
}

/// Driving port for vaccination reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccinationQuery: Send + Sync {
    /// Count the children whose age in days plus `range` has reached the
    /// dose's term, labelled with the dose denomination.
    async fn tracker(&self, dose_id: Uuid, range: i32) -> Result<TrackerProjection, Error>;
}
