//! PostgreSQL-backed `VaccineRepository` implementation using Diesel ORM.
//!
//! The catalogue is seeded by migrations; this adapter only reads it and
//! adjusts the global stock counters.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{VaccineRepository, VaccineRepositoryError};
use crate::domain::{Dose, Vaccine};

use super::error_mapping;
use super::models::{DoseRow, VaccineRow};
use super::pool::{DbPool, PoolError};
use super::schema::{doses, vaccines};

/// Diesel-backed implementation of the `VaccineRepository` port.
#[derive(Clone)]
pub struct DieselVaccineRepository {
    pool: DbPool,
}

impl DieselVaccineRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> VaccineRepositoryError {
    error_mapping::map_pool_error(error, VaccineRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> VaccineRepositoryError {
    error_mapping::map_diesel_error(
        error,
        VaccineRepositoryError::query,
        VaccineRepositoryError::connection,
    )
}

/// Re-validate a stored row into a domain vaccine.
fn row_to_vaccine(row: VaccineRow) -> Result<Vaccine, VaccineRepositoryError> {
    Vaccine::new(row.id, row.denomination, row.description, row.stock)
        .map_err(|err| VaccineRepositoryError::query(format!("stored vaccine invalid: {err}")))
}

/// Re-validate a stored row into a domain dose.
fn row_to_dose(row: DoseRow) -> Result<Dose, VaccineRepositoryError> {
    Dose::new(row.id, row.denomination, row.term, row.vaccine_id)
        .map_err(|err| VaccineRepositoryError::query(format!("stored dose invalid: {err}")))
}

fn rows_to_doses(rows: Vec<DoseRow>) -> Result<Vec<Dose>, VaccineRepositoryError> {
    rows.into_iter().map(row_to_dose).collect()
}

#[async_trait]
impl VaccineRepository for DieselVaccineRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<VaccineRow> = vaccines::table
            .filter(vaccines::id.eq(id))
            .select(VaccineRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_vaccine).transpose()
    }

    async fn list(&self) -> Result<Vec<Vaccine>, VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<VaccineRow> = vaccines::table
            .order(vaccines::denomination.asc())
            .select(VaccineRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_vaccine).collect()
    }

    async fn adjust_stock(&self, id: Uuid, delta: i32) -> Result<(), VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(vaccines::table.filter(vaccines::id.eq(id)))
            .set(vaccines::stock.eq(vaccines::stock + delta))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_dose_by_id(&self, id: Uuid) -> Result<Option<Dose>, VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DoseRow> = doses::table
            .filter(doses::id.eq(id))
            .select(DoseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_dose).transpose()
    }

    async fn list_doses(&self) -> Result<Vec<Dose>, VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DoseRow> = doses::table
            .order(doses::denomination.asc())
            .select(DoseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_doses(rows)
    }

    async fn list_doses_for_vaccine(
        &self,
        vaccine_id: Uuid,
    ) -> Result<Vec<Dose>, VaccineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DoseRow> = doses::table
            .filter(doses::vaccine_id.eq(vaccine_id))
            .order(doses::denomination.asc())
            .select(DoseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_doses(rows)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vaccine_rows_convert_to_domain_vaccines() {
        let row = VaccineRow {
            id: Uuid::new_v4(),
            denomination: "MMR".to_owned(),
            description: "Measles, mumps, and rubella".to_owned(),
            stock: 640,
        };

        let vaccine = row_to_vaccine(row).expect("valid row");

        assert_eq!(vaccine.denomination(), "MMR");
        assert_eq!(vaccine.stock(), 640);
    }

    #[rstest]
    fn negative_stored_stock_is_rejected() {
        let row = VaccineRow {
            id: Uuid::new_v4(),
            denomination: "MMR".to_owned(),
            description: "Measles, mumps, and rubella".to_owned(),
            stock: -5,
        };

        let err = row_to_vaccine(row).expect_err("negative stock must fail");

        assert!(matches!(err, VaccineRepositoryError::Query { .. }));
    }

    #[rstest]
    fn dose_rows_convert_to_domain_doses() {
        let vaccine_id = Uuid::new_v4();
        let row = DoseRow {
            id: Uuid::new_v4(),
            denomination: "MMR 1st dose".to_owned(),
            term: 365,
            vaccine_id,
        };

        let dose = row_to_dose(row).expect("valid row");

        assert_eq!(dose.denomination(), "MMR 1st dose");
        assert_eq!(dose.term(), 365);
        assert_eq!(dose.vaccine_id(), vaccine_id);
    }
}
