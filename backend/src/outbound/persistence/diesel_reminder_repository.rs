//! PostgreSQL-backed `ReminderRepository` implementation using Diesel ORM.
//!
//! Serves the reminder worker's scan: full dose and child listings, parent
//! lookups, and the append-only notified set in `child_dose_notifications`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ReminderRepository, ReminderRepositoryError};
use crate::domain::{
    AccountStatus, Child, Dose, EmailAddress, PersonName, User, VerificationToken,
};

use super::error_mapping;
use super::models::{ChildRow, DoseRow, NewChildDoseNotificationRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{child_dose_notifications, children, doses, users};

/// Diesel-backed implementation of the `ReminderRepository` port.
#[derive(Clone)]
pub struct DieselReminderRepository {
    pool: DbPool,
}

impl DieselReminderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReminderRepositoryError {
    error_mapping::map_pool_error(error, ReminderRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReminderRepositoryError {
    error_mapping::map_diesel_error(
        error,
        ReminderRepositoryError::query,
        ReminderRepositoryError::connection,
    )
}

fn row_to_dose(row: DoseRow) -> Result<Dose, ReminderRepositoryError> {
    Dose::new(row.id, row.denomination, row.term, row.vaccine_id)
        .map_err(|err| ReminderRepositoryError::query(format!("stored dose invalid: {err}")))
}

fn row_to_child(row: ChildRow) -> Result<Child, ReminderRepositoryError> {
    let first_name = PersonName::new(row.first_name).map_err(|err| {
        ReminderRepositoryError::query(format!("stored first name invalid: {err}"))
    })?;
    let last_name = PersonName::new(row.last_name)
        .map_err(|err| ReminderRepositoryError::query(format!("stored last name invalid: {err}")))?;

    Ok(Child::new(
        row.id,
        first_name,
        last_name,
        row.birthdate,
        row.parent_id,
    ))
}

fn row_to_user(row: UserRow) -> Result<User, ReminderRepositoryError> {
    let email = EmailAddress::new(row.email)
        .map_err(|err| ReminderRepositoryError::query(format!("stored email invalid: {err}")))?;
    let first_name = PersonName::new(row.first_name).map_err(|err| {
        ReminderRepositoryError::query(format!("stored first name invalid: {err}"))
    })?;
    let last_name = PersonName::new(row.last_name)
        .map_err(|err| ReminderRepositoryError::query(format!("stored last name invalid: {err}")))?;
    let status = AccountStatus::parse(&row.status).ok_or_else(|| {
        ReminderRepositoryError::query(format!("unrecognised account status '{}'", row.status))
    })?;

    Ok(User::new(
        row.id,
        email,
        row.password,
        first_name,
        last_name,
        status,
        row.token.map(VerificationToken::from_string),
    ))
}

#[async_trait]
impl ReminderRepository for DieselReminderRepository {
    async fn list_doses(&self) -> Result<Vec<Dose>, ReminderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DoseRow> = doses::table
            .select(DoseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_dose).collect()
    }

    async fn list_children(&self) -> Result<Vec<Child>, ReminderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChildRow> = children::table
            .select(ChildRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_child).collect()
    }

    async fn find_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Option<User>, ReminderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(parent_id))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn notified_dose_ids(
        &self,
        child_id: Uuid,
    ) -> Result<Vec<Uuid>, ReminderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        child_dose_notifications::table
            .filter(child_dose_notifications::child_id.eq(child_id))
            .select(child_dose_notifications::dose_id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn record_notified(
        &self,
        child_id: Uuid,
        dose_id: Uuid,
    ) -> Result<(), ReminderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewChildDoseNotificationRow { child_id, dose_id };

        diesel::insert_into(child_dose_notifications::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
