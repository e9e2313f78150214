//! Port for parent account persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EmailAddress, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Port for reading and writing parent accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Persist changes to an existing user record.
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by normalised email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the user currently holding a verification token.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Total number of user rows, the administrator included.
    async fn count(&self) -> Result<i64, UserRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn query_error_formats_message() {
        let err = UserRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }
}
