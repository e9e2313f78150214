//! PostgreSQL-backed `HospitalRepository` implementation using Diesel ORM.
//!
//! Owns both the hospital rows and the per-hospital inventory rows in
//! `hospital_vaccines`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{HospitalInventoryLine, HospitalRepository, HospitalRepositoryError};
use crate::domain::{Hospital, HospitalVaccine};

use super::error_mapping;
use super::models::{HospitalRow, HospitalVaccineRow, NewHospitalRow, NewHospitalVaccineRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hospital_vaccines, hospitals, vaccines};

diesel::define_sql_function! {
    /// PostgreSQL `lower`, used for case-insensitive name lookups.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Diesel-backed implementation of the `HospitalRepository` port.
#[derive(Clone)]
pub struct DieselHospitalRepository {
    pool: DbPool,
}

impl DieselHospitalRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HospitalRepositoryError {
    error_mapping::map_pool_error(error, HospitalRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HospitalRepositoryError {
    error_mapping::map_diesel_error(
        error,
        HospitalRepositoryError::query,
        HospitalRepositoryError::connection,
    )
}

/// Re-validate a stored row into a domain hospital.
fn row_to_hospital(row: HospitalRow) -> Result<Hospital, HospitalRepositoryError> {
    Hospital::new(row.id, row.name)
        .map_err(|err| HospitalRepositoryError::query(format!("stored hospital invalid: {err}")))
}

fn row_to_link(row: HospitalVaccineRow) -> HospitalVaccine {
    HospitalVaccine::new(row.id, row.hospital_id, row.vaccine_id, row.quantity)
}

#[async_trait]
impl HospitalRepository for DieselHospitalRepository {
    async fn insert(&self, hospital: &Hospital) -> Result<(), HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewHospitalRow {
            id: hospital.id(),
            name: hospital.name(),
        };

        diesel::insert_into(hospitals::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hospital>, HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<HospitalRow> = hospitals::table
            .filter(hospitals::id.eq(id))
            .select(HospitalRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_hospital).transpose()
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Hospital>, HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<HospitalRow> = hospitals::table
            .filter(lower(hospitals::name).eq(name.to_lowercase()))
            .select(HospitalRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_hospital).transpose()
    }

    async fn list(&self) -> Result<Vec<Hospital>, HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<HospitalRow> = hospitals::table
            .order(hospitals::name.asc())
            .select(HospitalRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_hospital).collect()
    }

    async fn insert_link(&self, link: &HospitalVaccine) -> Result<(), HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewHospitalVaccineRow {
            id: link.id(),
            quantity: link.quantity(),
            hospital_id: link.hospital_id(),
            vaccine_id: link.vaccine_id(),
        };

        diesel::insert_into(hospital_vaccines::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_link(
        &self,
        hospital_id: Uuid,
        vaccine_id: Uuid,
    ) -> Result<Option<HospitalVaccine>, HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<HospitalVaccineRow> = hospital_vaccines::table
            .filter(
                hospital_vaccines::hospital_id
                    .eq(hospital_id)
                    .and(hospital_vaccines::vaccine_id.eq(vaccine_id)),
            )
            .select(HospitalVaccineRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_link))
    }

    async fn adjust_link_quantity(
        &self,
        hospital_id: Uuid,
        vaccine_id: Uuid,
        delta: i32,
    ) -> Result<(), HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Updating an absent pair matches zero rows, which is the documented
        // no-op behaviour.
        diesel::update(
            hospital_vaccines::table.filter(
                hospital_vaccines::hospital_id
                    .eq(hospital_id)
                    .and(hospital_vaccines::vaccine_id.eq(vaccine_id)),
            ),
        )
        .set(hospital_vaccines::quantity.eq(hospital_vaccines::quantity + delta))
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }

    async fn list_inventory(
        &self,
        hospital_id: Uuid,
    ) -> Result<Vec<HospitalInventoryLine>, HospitalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(String, Uuid, Uuid, i32)> = hospital_vaccines::table
            .inner_join(vaccines::table)
            .filter(hospital_vaccines::hospital_id.eq(hospital_id))
            .order(vaccines::denomination.asc())
            .select((
                vaccines::denomination,
                hospital_vaccines::hospital_id,
                hospital_vaccines::vaccine_id,
                hospital_vaccines::quantity,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(
                |(denomination, hospital_id, vaccine_id, quantity)| HospitalInventoryLine {
                    denomination,
                    hospital_id,
                    vaccine_id,
                    quantity,
                },
            )
            .collect())
    }
}
