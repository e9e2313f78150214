//! Driving port for account sign-up, login, verification, and updates.
//!
//! Inbound adapters call this port to run account flows without knowing the
//! backing persistence or mail infrastructure, so handler tests substitute a
//! test double instead of wiring repositories.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccountRole, Error, LoginCredentials};

/// Request to register a new parent account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Response to a successful sign-up, pointing at the verification page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResponse {
    pub href: String,
}

/// Identity to persist in the session after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub account_id: Uuid,
    pub role: AccountRole,
}

/// Login outcome.
///
/// `account` is `None` when credentials were valid but the address is still
/// unverified; the caller then gets a fresh verification email and `href`
/// points at the verification page instead of the role's home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub account: Option<AuthenticatedAccount>,
    pub href: String,
}

/// Request to confirm an email address with a mailed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub token: String,
}

/// Response after processing a verification link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEmailResponse {
    pub href: String,
}

/// Request to update the signed-in parent's account.
///
/// The password is rehashed on every update; omitted optional fields keep
/// their current values. A changed email drops the account back to the
/// unverified state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub account_id: Uuid,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Response to a parent account update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserResponse {
    pub href: String,
    pub end_session: bool,
}

/// Contact-form message relayed to the administrators' mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub account_id: Uuid,
    pub role: AccountRole,
    pub subject: String,
    pub message: String,
}

/// Driving port for account mutation flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new unverified parent and mail a verification link.
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, Error>;

    /// Authenticate credentials against the nurse table first, then users.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, Error>;

    /// Confirm an email address from a mailed verification link.
    async fn verify_email(
        &self,
        request: VerifyEmailRequest,
    ) -> Result<VerifyEmailResponse, Error>;

    /// Update the signed-in parent's account.
    async fn update_user(&self, request: UpdateUserRequest)
        -> Result<UpdateUserResponse, Error>;

    /// Relay a contact-form message to the administrators.
    async fn send_contact(&self, request: ContactRequest) -> Result<(), Error>;
}
