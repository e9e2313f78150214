//! Embedded schema migrations applied at startup.
//!
//! Migrations run over a dedicated synchronous connection before the pool is
//! built; the server only starts taking traffic once the schema is current.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Failures while bringing the schema up to date.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open a connection to run migrations over.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Description of the migration failure.
        message: String,
    },
}

/// Apply all pending embedded migrations to the given database.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;

    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;

    if applied.is_empty() {
        info!("database schema is current");
    } else {
        info!(count = applied.len(), "applied pending migrations");
    }
    Ok(())
}
