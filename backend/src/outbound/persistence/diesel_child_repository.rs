//! PostgreSQL-backed `ChildRepository` implementation using Diesel ORM.
//!
//! Besides the child rows themselves this adapter owns the administered-dose
//! association table, which the vaccination flows append to and the admin
//! dashboard aggregates over.

use async_trait::async_trait;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ChildRepository, ChildRepositoryError, DoseAdministeredCount};
use crate::domain::{Child, PersonName};

use super::error_mapping;
use super::models::{ChildRow, ChildUpdate, NewChildDoseRow, NewChildRow};
use super::pool::{DbPool, PoolError};
use super::schema::{child_doses, children, doses};

/// Diesel-backed implementation of the `ChildRepository` port.
#[derive(Clone)]
pub struct DieselChildRepository {
    pool: DbPool,
}

impl DieselChildRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ChildRepositoryError {
    error_mapping::map_pool_error(error, ChildRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ChildRepositoryError {
    error_mapping::map_diesel_error(
        error,
        ChildRepositoryError::query,
        ChildRepositoryError::connection,
    )
}

/// Re-validate a stored row into a domain child.
fn row_to_child(row: ChildRow) -> Result<Child, ChildRepositoryError> {
    let first_name = PersonName::new(row.first_name)
        .map_err(|err| ChildRepositoryError::query(format!("stored first name invalid: {err}")))?;
    let last_name = PersonName::new(row.last_name)
        .map_err(|err| ChildRepositoryError::query(format!("stored last name invalid: {err}")))?;

    Ok(Child::new(
        row.id,
        first_name,
        last_name,
        row.birthdate,
        row.parent_id,
    ))
}

fn rows_to_children(rows: Vec<ChildRow>) -> Result<Vec<Child>, ChildRepositoryError> {
    rows.into_iter().map(row_to_child).collect()
}

#[async_trait]
impl ChildRepository for DieselChildRepository {
    async fn insert(&self, child: &Child) -> Result<(), ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewChildRow {
            id: child.id(),
            first_name: child.first_name().as_ref(),
            last_name: child.last_name().as_ref(),
            birthdate: child.birthdate(),
            parent_id: child.parent_id(),
        };

        diesel::insert_into(children::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, child: &Child) -> Result<(), ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = ChildUpdate {
            first_name: child.first_name().as_ref(),
            last_name: child.last_name().as_ref(),
            birthdate: child.birthdate(),
        };

        diesel::update(children::table.filter(children::id.eq(child.id())))
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(children::table.filter(children::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ChildRow> = children::table
            .filter(children::id.eq(id))
            .select(ChildRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_child).transpose()
    }

    async fn list(&self) -> Result<Vec<Child>, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChildRow> = children::table
            .order(children::first_name.asc())
            .select(ChildRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_children(rows)
    }

    async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<Child>, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChildRow> = children::table
            .filter(children::parent_id.eq(parent_id))
            .order(children::first_name.asc())
            .select(ChildRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_children(rows)
    }

    async fn count(&self) -> Result<i64, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        children::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn is_administered(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<bool, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            child_doses::table.filter(
                child_doses::child_id
                    .eq(child_id)
                    .and(child_doses::dose_id.eq(dose_id)),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn record_administered(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<(), ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewChildDoseRow { child_id, dose_id };

        diesel::insert_into(child_doses::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn count_administered_per_dose(
        &self,
    ) -> Result<Vec<DoseAdministeredCount>, ChildRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Left join so doses never administered keep a zero count.
        let rows: Vec<(String, i64)> = doses::table
            .left_join(child_doses::table)
            .group_by((doses::id, doses::denomination))
            .order(doses::denomination.asc())
            .select((doses::denomination, count(child_doses::child_id.nullable())))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(denomination, children)| DoseAdministeredCount {
                denomination,
                children,
            })
            .collect())
    }
}
