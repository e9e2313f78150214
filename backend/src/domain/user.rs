//! Parent account data model.
//!
//! A `User` row is a parent account unless its email matches the configured
//! administrator address, in which case it logs in as the admin. That
//! resolution lives in the account service; this type is plain data with
//! validated components.

use uuid::Uuid;

use crate::domain::{AccountStatus, EmailAddress, PersonName, VerificationToken};

/// Registered parent (or administrator) account.
///
/// ## Invariants
/// - `email` is unique across the users table and is never shared with a
///   nurse account; sign-up checks both tables.
/// - `verification_token` is present only while a verification email is
///   outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    email: EmailAddress,
    password_hash: String,
    first_name: PersonName,
    last_name: PersonName,
    status: AccountStatus,
    verification_token: Option<VerificationToken>,
}

impl User {
    /// Assemble a user from validated components.
    #[expect(clippy::too_many_arguments, reason = "flat constructor mirrors the row")]
    pub fn new(
        id: Uuid,
        email: EmailAddress,
        password_hash: String,
        first_name: PersonName,
        last_name: PersonName,
        status: AccountStatus,
        verification_token: Option<VerificationToken>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            first_name,
            last_name,
            status,
            verification_token,
        }
    }

    /// Create a fresh unverified account with a random identifier.
    pub fn register(
        email: EmailAddress,
        password_hash: String,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        Self::new(
            Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            AccountStatus::Unverified,
            None,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn verification_token(&self) -> Option<&VerificationToken> {
        self.verification_token.as_ref()
    }

    /// "First Last" as used in outbound email bodies.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_verified(&self) -> bool {
        self.status == AccountStatus::Verified
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn sample_user() -> User {
        User::register(
            EmailAddress::new("parent@example.com").expect("valid email"),
            "hash".to_owned(),
            PersonName::new("Ada").expect("valid name"),
            PersonName::new("Lovelace").expect("valid name"),
        )
    }

    #[rstest]
    fn register_starts_unverified_without_token() {
        let user = sample_user();
        assert_eq!(user.status(), AccountStatus::Unverified);
        assert!(!user.is_verified());
        assert!(user.verification_token().is_none());
    }

    #[rstest]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample_user().full_name(), "Ada Lovelace");
    }

    #[rstest]
    fn register_assigns_distinct_ids() {
        assert_ne!(sample_user().id(), sample_user().id());
    }
}
