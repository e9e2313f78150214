//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as persisting a login or requiring a role.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::AuthenticatedAccount;
use crate::domain::{AccountRole, Error};

pub(crate) const ACCOUNT_ID_KEY: &str = "account_id";
pub(crate) const ROLE_KEY: &str = "role";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated account in the session cookie.
    pub fn persist_account(&self, account: &AuthenticatedAccount) -> Result<(), Error> {
        self.0
            .insert(ACCOUNT_ID_KEY, account.account_id.to_string())
            .and_then(|()| self.0.insert(ROLE_KEY, account.role.as_str()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop all session state, ending the login.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// Fetch the current account from the session, if present.
    ///
    /// A cookie that decodes but carries an unparseable id or role is treated
    /// as no session rather than an error, so a stale or tampered cookie
    /// degrades to "not logged in".
    pub fn account(&self) -> Result<Option<AuthenticatedAccount>, Error> {
        let Some(raw_id) = self.read(ACCOUNT_ID_KEY)? else {
            return Ok(None);
        };
        let Some(raw_role) = self.read(ROLE_KEY)? else {
            return Ok(None);
        };
        let Ok(account_id) = Uuid::parse_str(&raw_id) else {
            tracing::warn!("invalid account id in session cookie");
            return Ok(None);
        };
        let Some(role) = AccountRole::parse(&raw_role) else {
            tracing::warn!(role = %raw_role, "invalid role in session cookie");
            return Ok(None);
        };
        Ok(Some(AuthenticatedAccount { account_id, role }))
    }

    /// Require an authenticated account or return `401 Unauthorized`.
    pub fn require_account(&self) -> Result<AuthenticatedAccount, Error> {
        self.account()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Require exactly the given role or fail.
    pub fn require_role(&self, role: AccountRole) -> Result<AuthenticatedAccount, Error> {
        self.require_role_in(&[role])
    }

    /// Require one of the given roles or fail.
    ///
    /// No session yields `401 Unauthorized`. A session with another role
    /// yields `403 Forbidden` with the caller's own dashboard under
    /// `details.redirect` so the frontend can route them home.
    pub fn require_role_in(&self, roles: &[AccountRole]) -> Result<AuthenticatedAccount, Error> {
        let account = self.require_account()?;
        if roles.contains(&account.role) {
            Ok(account)
        } else {
            Err(
                Error::forbidden("this endpoint is not available to your role").with_details(
                    json!({"redirect": account.role.home_path()}),
                ),
            )
        }
    }

    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(key)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
