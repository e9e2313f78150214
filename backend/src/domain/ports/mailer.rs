//! Port for outbound email delivery.

use async_trait::async_trait;

use crate::domain::OutboundEmail;

use super::define_port_error;

define_port_error! {
    /// Delivery errors raised by mailer adapters.
    pub enum MailerError {
        /// The relay could not be reached or refused the connection.
        Connection { message: String } => "mail relay connection failed: {message}",
        /// The relay accepted the connection but rejected the message.
        Delivery { message: String } => "mail delivery failed: {message}",
    }
}

/// Port for handing rendered emails to an SMTP relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn delivery_error_formats_message() {
        let err = MailerError::delivery("mailbox unavailable");
        assert_eq!(err.to_string(), "mail delivery failed: mailbox unavailable");
    }
}
