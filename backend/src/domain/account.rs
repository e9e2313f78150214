//! Account primitives shared by parents, nurses, and the administrator.
//!
//! Role resolution happens exactly once, at login: a matching nurse row makes
//! the caller a [`AccountRole::Nurse`], a user row whose email equals the
//! configured administrator address makes them [`AccountRole::Admin`], and
//! any other user row makes them [`AccountRole::Parent`]. Handlers never
//! re-derive the role from storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors for account value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyEmail,
    InvalidEmail,
    EmptyName,
    NameTooLong { max: usize },
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain a local part and a domain"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Normalised email address used for lookups and uniqueness checks.
///
/// ## Invariants
/// - Trimmed and lowercased on construction, so lookups match regardless of
///   the casing the caller typed.
/// - Must contain a non-empty local part and domain around a single-or-more
///   `@`; full RFC validation is left to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`], normalising the input.
    pub fn new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, AccountValidationError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AccountValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || domain.chars().any(char::is_whitespace) {
            return Err(AccountValidationError::InvalidEmail);
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Maximum allowed length for a person name, matching the storage column.
pub const PERSON_NAME_MAX: usize = 128;

/// A first or last name as entered at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, AccountValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, AccountValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if trimmed.chars().count() > PERSON_NAME_MAX {
            return Err(AccountValidationError::NameTooLong {
                max: PERSON_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Account role resolved at authentication time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// A registered parent tracking their children's vaccinations.
    Parent,
    /// A nurse recording vaccinations and managing hospital inventory.
    Nurse,
    /// The administrator account overseeing hospitals, nurses, and stock.
    Admin,
}

impl AccountRole {
    /// Frontend location the role is routed to after login.
    ///
    /// Total over roles; guards use it to tell a misrouted caller where
    /// their own dashboard lives.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Parent => "/",
            Self::Nurse => "/nurse/home",
            Self::Admin => "/admin",
        }
    }

    /// Stable storage representation, also used in session cookies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Nurse => "nurse",
            Self::Admin => "admin",
        }
    }

    /// Parse the storage representation back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "parent" => Some(Self::Parent),
            "nurse" => Some(Self::Nurse),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification state of an account's email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Unverified,
    Verified,
}

impl AccountStatus {
    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Verified => "verified",
        }
    }

    /// Parse the storage representation back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unverified" => Some(Self::Unverified),
            "verified" => Some(Self::Verified),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL-safe random token mailed out for email verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationToken(String);

impl VerificationToken {
    const TOKEN_BYTES: usize = 16;

    /// Generate a fresh random token.
    pub fn generate() -> Self {
        use rand::RngCore;

        let mut bytes = [0u8; Self::TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a token received on the wire.
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for VerificationToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<VerificationToken> for String {
    fn from(value: VerificationToken) -> Self {
        value.0
    }
}
