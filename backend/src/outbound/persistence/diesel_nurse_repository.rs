//! PostgreSQL-backed `NurseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{HospitalNurseCount, NurseRepository, NurseRepositoryError};
use crate::domain::{AccountStatus, EmailAddress, Nurse, PersonName, VerificationToken};

use super::error_mapping;
use super::models::{NewNurseRow, NurseRow, NurseUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{hospitals, nurses};

/// Diesel-backed implementation of the `NurseRepository` port.
#[derive(Clone)]
pub struct DieselNurseRepository {
    pool: DbPool,
}

impl DieselNurseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NurseRepositoryError {
    error_mapping::map_pool_error(error, NurseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> NurseRepositoryError {
    error_mapping::map_diesel_error(
        error,
        NurseRepositoryError::query,
        NurseRepositoryError::connection,
    )
}

/// Re-validate a stored row into a domain nurse.
fn row_to_nurse(row: NurseRow) -> Result<Nurse, NurseRepositoryError> {
    let email = EmailAddress::new(row.email)
        .map_err(|err| NurseRepositoryError::query(format!("stored email invalid: {err}")))?;
    let first_name = PersonName::new(row.first_name)
        .map_err(|err| NurseRepositoryError::query(format!("stored first name invalid: {err}")))?;
    let last_name = PersonName::new(row.last_name)
        .map_err(|err| NurseRepositoryError::query(format!("stored last name invalid: {err}")))?;
    let status = AccountStatus::parse(&row.status).ok_or_else(|| {
        NurseRepositoryError::query(format!("unrecognised account status '{}'", row.status))
    })?;

    Ok(Nurse::new(
        row.id,
        email,
        row.password,
        first_name,
        last_name,
        status,
        row.token.map(VerificationToken::from_string),
        row.hospital_id,
    ))
}

fn rows_to_nurses(rows: Vec<NurseRow>) -> Result<Vec<Nurse>, NurseRepositoryError> {
    rows.into_iter().map(row_to_nurse).collect()
}

#[async_trait]
impl NurseRepository for DieselNurseRepository {
    async fn insert(&self, nurse: &Nurse) -> Result<(), NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let token = nurse.verification_token().map(AsRef::as_ref);
        let new_row = NewNurseRow {
            id: nurse.id(),
            email: nurse.email().as_ref(),
            password: nurse.password_hash(),
            first_name: nurse.first_name().as_ref(),
            last_name: nurse.last_name().as_ref(),
            status: nurse.status().as_str(),
            token,
            hospital_id: nurse.hospital_id(),
        };

        diesel::insert_into(nurses::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, nurse: &Nurse) -> Result<(), NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let token = nurse.verification_token().map(AsRef::as_ref);
        let update = NurseUpdate {
            email: nurse.email().as_ref(),
            password: nurse.password_hash(),
            first_name: nurse.first_name().as_ref(),
            last_name: nurse.last_name().as_ref(),
            status: nurse.status().as_str(),
            token,
            hospital_id: nurse.hospital_id(),
        };

        diesel::update(nurses::table.filter(nurses::id.eq(nurse.id())))
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(nurses::table.filter(nurses::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Nurse>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NurseRow> = nurses::table
            .filter(nurses::id.eq(id))
            .select(NurseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_nurse).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Nurse>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NurseRow> = nurses::table
            .filter(nurses::email.eq(email.as_ref()))
            .select(NurseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_nurse).transpose()
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Nurse>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NurseRow> = nurses::table
            .filter(nurses::token.eq(token))
            .select(NurseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_nurse).transpose()
    }

    async fn list(&self) -> Result<Vec<Nurse>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NurseRow> = nurses::table
            .order(nurses::first_name.asc())
            .select(NurseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_nurses(rows)
    }

    async fn list_by_hospital(
        &self,
        hospital_id: Uuid,
    ) -> Result<Vec<Nurse>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NurseRow> = nurses::table
            .filter(nurses::hospital_id.eq(hospital_id))
            .order(nurses::first_name.asc())
            .select(NurseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_nurses(rows)
    }

    async fn count(&self) -> Result<i64, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        nurses::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn count_by_hospital(&self) -> Result<Vec<HospitalNurseCount>, NurseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Left join so hospitals without nurses keep a zero count.
        let rows: Vec<(String, i64)> = hospitals::table
            .left_join(nurses::table)
            .group_by((hospitals::id, hospitals::name))
            .order(hospitals::name.asc())
            .select((hospitals::name, count(nurses::id.nullable())))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(hospital_name, nurses)| HospitalNurseCount {
                hospital_name,
                nurses,
            })
            .collect())
    }
}
