//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{AccountStatus, EmailAddress, PersonName, User, VerificationToken};

use super::error_mapping;
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    error_mapping::map_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    error_mapping::map_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

/// Re-validate a stored row into a domain user.
///
/// Rows are written through validated domain types, so a failure here means
/// the table was edited out of band.
fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let email = EmailAddress::new(row.email)
        .map_err(|err| UserRepositoryError::query(format!("stored email invalid: {err}")))?;
    let first_name = PersonName::new(row.first_name)
        .map_err(|err| UserRepositoryError::query(format!("stored first name invalid: {err}")))?;
    let last_name = PersonName::new(row.last_name)
        .map_err(|err| UserRepositoryError::query(format!("stored last name invalid: {err}")))?;
    let status = AccountStatus::parse(&row.status).ok_or_else(|| {
        UserRepositoryError::query(format!("unrecognised account status '{}'", row.status))
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
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let token = user.verification_token().map(AsRef::as_ref);
        let new_row = NewUserRow {
            id: user.id(),
            email: user.email().as_ref(),
            password: user.password_hash(),
            first_name: user.first_name().as_ref(),
            last_name: user.last_name().as_ref(),
            status: user.status().as_str(),
            token,
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let token = user.verification_token().map(AsRef::as_ref);
        let update = UserUpdate {
            email: user.email().as_ref(),
            password: user.password_hash(),
            first_name: user.first_name().as_ref(),
            last_name: user.last_name().as_ref(),
            status: user.status().as_str(),
            token,
        };

        diesel::update(users::table.filter(users::id.eq(user.id())))
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::token.eq(token))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn count(&self) -> Result<i64, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
