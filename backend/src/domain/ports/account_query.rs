//! Driving port for account lookups that need no session.

use async_trait::async_trait;

use crate::domain::Error;

/// Driving port for account existence probes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Whether the address belongs to a user or nurse account.
    ///
    /// Addresses that do not parse as emails report `false` rather than an
    /// error; the probe answers "could this address log in".
    async fn account_exists(&self, email: &str) -> Result<bool, Error>;
}
