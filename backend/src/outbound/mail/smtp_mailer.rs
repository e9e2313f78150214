//! SMTP delivery adapter for the `Mailer` port.
//!
//! Uses `lettre`'s async transport with implicit TLS, the wrapper mode relays
//! such as Gmail expect on port 465. Credentials come from configuration; the
//! authenticated mailbox doubles as the `From` address.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::OutboundEmail;
use crate::domain::ports::{Mailer, MailerError};

/// Connection settings for the SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. `smtp.gmail.com`.
    pub host: String,
    /// Relay port; 465 for implicit TLS.
    pub port: u16,
    /// Mailbox to authenticate as and send from.
    pub username: String,
    /// Password or app-specific credential for the mailbox.
    pub password: String,
}

/// `Mailer` adapter delivering over an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Build the transport from relay settings.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Connection`] when the TLS parameters or relay
    /// address are unusable. Network errors surface later, on send.
    pub fn new(config: SmtpConfig) -> Result<Self, MailerError> {
        let tls = TlsParameters::new(config.host.clone())
            .map_err(|err| MailerError::connection(err.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|err| MailerError::connection(err.to_string()))?
            .port(config.port)
            .tls(Tls::Wrapper(tls))
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.username,
        })
    }

    fn build_message(&self, email: &OutboundEmail) -> Result<Message, MailerError> {
        let from = self
            .from
            .parse()
            .map_err(|_| MailerError::delivery(format!("invalid sender mailbox '{}'", self.from)))?;
        let to = email
            .to()
            .as_ref()
            .parse()
            .map_err(|_| MailerError::delivery(format!("invalid recipient '{}'", email.to())))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body().to_owned())
            .map_err(|err| MailerError::delivery(err.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let message = self.build_message(email)?;

        self.transport.send(message).await.map(|_| ()).map_err(|err| {
            // Permanent and transient failures are relay verdicts on the
            // message itself; anything else is transport plumbing.
            if err.is_permanent() || err.is_transient() {
                MailerError::delivery(err.to_string())
            } else {
                MailerError::connection(err.to_string())
            }
        })
    }
}
