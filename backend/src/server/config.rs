//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use backend::domain::{AppLinks, EmailAddress};
use backend::inbound::http::session_config::SessionSettings;
use backend::outbound::mail::SmtpMailer;
use backend::outbound::persistence::DbPool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Application-level settings shared by the account and nurse services.
pub struct AppContext {
    /// Link builder for verification and login URLs in outbound mail.
    pub links: AppLinks,
    /// Address recognised as the administrator at login.
    pub admin_email: EmailAddress,
    /// Mailbox that receives contact-form messages.
    pub admin_mailbox: EmailAddress,
}

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) mailer: Arc<SmtpMailer>,
    pub(crate) context: AppContext,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings and
    /// the outbound adapters.
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        db_pool: DbPool,
        mailer: Arc<SmtpMailer>,
        context: AppContext,
    ) -> Self {
        Self {
            key: session.key,
            cookie_secure: session.cookie_secure,
            same_site: session.same_site,
            bind_addr,
            db_pool,
            mailer,
            context,
        }
    }
}
