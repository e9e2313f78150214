//! Nurse account data model.

use uuid::Uuid;

use crate::domain::{AccountStatus, EmailAddress, PersonName, VerificationToken};

/// Nurse account, optionally assigned to a hospital.
///
/// ## Invariants
/// - `email` is unique across the nurses table; at login a nurse row shadows
///   a user row with the same address.
/// - At most one hospital assignment at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nurse {
    id: Uuid,
    email: EmailAddress,
    password_hash: String,
    first_name: PersonName,
    last_name: PersonName,
    status: AccountStatus,
    verification_token: Option<VerificationToken>,
    hospital_id: Option<Uuid>,
}

impl Nurse {
    /// Assemble a nurse from validated components.
    #[expect(clippy::too_many_arguments, reason = "flat constructor mirrors the row")]
    pub fn new(
        id: Uuid,
        email: EmailAddress,
        password_hash: String,
        first_name: PersonName,
        last_name: PersonName,
        status: AccountStatus,
        verification_token: Option<VerificationToken>,
        hospital_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            first_name,
            last_name,
            status,
            verification_token,
            hospital_id,
        }
    }

    /// Create a fresh unverified nurse with a random identifier.
    pub fn register(
        email: EmailAddress,
        password_hash: String,
        first_name: PersonName,
        last_name: PersonName,
        hospital_id: Option<Uuid>,
    ) -> Self {
        Self::new(
            Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            AccountStatus::Unverified,
            None,
            hospital_id,
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

    pub fn hospital_id(&self) -> Option<Uuid> {
        self.hospital_id
    }

    /// "First Last" as used in outbound email bodies.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_verified(&self) -> bool {
        self.status == AccountStatus::Verified
    }
}
