//! Outbound email messages and their HTML bodies.
//!
//! Message copy lives here so that services and the reminder worker stay
//! free of markup. Delivery happens behind the
//! [`Mailer`](crate::domain::ports::Mailer) port.

use crate::domain::{AccountRole, EmailAddress, ReminderWindow, VerificationToken};

/// A fully rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    to: EmailAddress,
    subject: String,
    html_body: String,
}

impl OutboundEmail {
    pub fn new(to: EmailAddress, subject: String, html_body: String) -> Self {
        Self {
            to,
            subject,
            html_body,
        }
    }

    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    pub fn html_body(&self) -> &str {
        self.html_body.as_str()
    }
}

/// Absolute links into the web frontend, derived from the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLinks {
    base_url: String,
}

impl AppLinks {
    /// Build a link factory from a base URL such as `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Link that completes email verification for an account.
    pub fn verify_link(&self, email: &EmailAddress, token: &VerificationToken) -> String {
        format!("{}/api/v1/verify/{}/{}", self.base_url, email, token)
    }

    /// Link to the login page.
    pub fn login_link(&self) -> String {
        format!("{}/login", self.base_url)
    }
}

/// Welcome message carrying an email verification link.
pub fn verification_email(to: EmailAddress, verification_link: &str) -> OutboundEmail {
    let subject = "VaxWise APP Email Verification".to_owned();
    let html_body = format!(
        r#"
    <html>
        <body style="text-align:center">
            <br />
            <h1>VaxWise APP</h1>
            <strong style="font-size:18px; display: block;">Welcome to our platform!</strong>
            <p style="font-size:16px;">To get started, please verify your email address by clicking the link below:</p>
            <a href="{verification_link}"  style="font-size:16px; display: block;">Verify Email</a>
            <p  style="font-size:16px;">If you did not sign up for our platform, please ignore this email.</p><br />
            <p style="font-size:16px;">Thank you!</p>
        </body>
    </html>
    "#
    );
    OutboundEmail::new(to, subject, html_body)
}

/// Account credentials for a nurse whose email is already verified.
///
/// Carries a login link; the unverified variant is
/// [`nurse_credentials_unverified_email`].
pub fn nurse_credentials_verified_email(
    to: EmailAddress,
    first_name: &str,
    password: &str,
    login_link: &str,
) -> OutboundEmail {
    let email = &to;
    let subject = "Your Account Credentials for VaxWise App".to_owned();
    let html_body = format!(
        r#"
        <html>
            <body>
                <h1>VaxWise APP</h1>
                <p style="font-size:16px;"><b>Dear {first_name},</b></p>
                <p style="font-size:16px;">We are delighted to inform you that an account has been updated for you on VaxWise. Below are your login credentials:</p>
                <p style="font-size:16px;">Email Address: <b>{email}</b></p>
                <p style="font-size:16px;">Password: <b>{password}</b><br></p>
                <p style="font-size:16px;">For security reasons, we recommend changing your password after your initial login. Please ensure that you keep your login credentials confidential and do not share them with anyone.</p>
                <p style="font-size:16px;">To access your account, follow this link <a href="{login_link}" style="font-size:16px;">here</a> .<br></p>
                <p style="font-size:16px;">Best regards,</p>
                <p style="font-size:16px;"><b>VaxWise Team</b></p>
            </body>
        </html>
        "#
    );
    OutboundEmail::new(to, subject, html_body)
}

/// Account credentials for a nurse who still has to verify their email.
pub fn nurse_credentials_unverified_email(
    to: EmailAddress,
    first_name: &str,
    password: &str,
    verification_link: &str,
) -> OutboundEmail {
    let email = &to;
    let subject = "Your Account Credentials for VaxWise App".to_owned();
    let html_body = format!(
        r#"
        <html>
            <body>
                <h1>VaxWise APP</h1>
                <p style="font-size:16px;"><b>Dear {first_name},</b></p>
                <p style="font-size:16px;">We are delighted to inform you that an account has been created/updated for you on VaxWise. Below are your login credentials:</p>
                <p style="font-size:16px;">Email Address: <b>{email}</b></p>
                <p style="font-size:16px;">Password: <b>{password}</b><br></p>
                <p style="font-size:16px;">For security reasons, we recommend changing your password after your initial login. Please ensure that you keep your login credentials confidential and do not share them with anyone.</p>
                <p style="font-size:16px;">To access your account, follow this link <a href="{verification_link}" style="font-size:16px;">Verify Email</a> to verify your email address.<br></p>
                <p style="font-size:16px;">Best regards,</p>
                <p style="font-size:16px;"><b>VaxWise Team</b></p>
            </body>
        </html>
        "#
    );
    OutboundEmail::new(to, subject, html_body)
}

/// Dose reminder sent to a parent ahead of a scheduled term.
pub fn reminder_email(
    to: EmailAddress,
    parent_first_name: &str,
    child_first_name: &str,
    dose_denomination: &str,
    window: ReminderWindow,
) -> OutboundEmail {
    let schedule = window.label();
    let subject = "Vaccination reminder".to_owned();
    let html_body = format!(
        r#"
        <html>
            <head>
                <style>
                    body {{
                        font-family: Arial, sans-serif;
                        line-height: 1.6;
                        color: #333;
                        margin: 20px;
                    }}
                    .header {{
                        text-align: center;
                        margin-bottom: 20px;
                    }}
                    .reminder {{
                        font-size: 16px;
                        margin-bottom: 15px;
                    }}
                    .contact-info {{
                        font-style: italic;
                    }}
                    .signature {{
                        font-weight: bold;
                    }}
                </style>
            </head>
            <body>
                <div class="header">
                    <h2>Hi {parent_first_name}!</h2>
                    <p>This is a friendly reminder from VaxWise.</p>
                </div>
                <div class="reminder">
                    <p>
                        Just a reminder that your child's
                         {child_first_name} {dose_denomination}
                         vaccination is scheduled {schedule}.
                         Please ensure your child's timely visit to
                         the medical center.
                    </p>
                </div>
                <div class="contact-info">
                    <p>
                        If you have any questions or need further
                         information about the vaccination, don't
                         hesitate to contact your medical center
                         directly.
                         They can provide the necessary guidance
                         and support:
                    </p>
                </div>
                <div class="signature">
                    <p>Best Regards,<br>VaxWise Team</p>
                </div>
            </body>
        </html>
        "#
    );
    OutboundEmail::new(to, subject, html_body)
}

/// Message relayed from a signed-in account to the administrators' mailbox.
pub fn contact_email(
    admin_mailbox: EmailAddress,
    sender_role: AccountRole,
    sender_full_name: &str,
    sender_email: &EmailAddress,
    subject: &str,
    message: &str,
) -> OutboundEmail {
    let mail_subject = match sender_role {
        AccountRole::Nurse => "VaxWise APP - Nurse message".to_owned(),
        AccountRole::Parent | AccountRole::Admin => "VaxWise APP - User message".to_owned(),
    };
    let html_body = format!(
        r#"
    <html>
        <body>
            <h1>VaxWise APP</h1>
            <h5 style="font-size:16px;">Message from "{sender_full_name}"; email address: <strong>{sender_email}</strong></h5>
            <h6 style="font-size:16px; display: inline-block;">Subject: &nbsp;</h6>
            <p style="font-size:16px; display: inline-block;">{subject}</p><br />
            <h6 style="font-size:16px; margin: 0px;">Message:</h6>
            <p style="font-size:16px; margin: 0px;">{message}</p>
        </body>
    </html>
    "#
    );
    OutboundEmail::new(admin_mailbox, mail_subject, html_body)
}
