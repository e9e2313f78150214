//! Account domain service.
//!
//! Implements sign-up, login, email verification, self-service updates, and
//! the contact relay over the user and nurse repositories and the mailer
//! port. Role resolution happens here, once per login: a nurse row shadows a
//! user row with the same address, and the configured administrator email
//! turns a user row into the admin.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::email::{contact_email, verification_email};
use crate::domain::ports::{
    AccountCommand, AccountQuery, AuthenticatedAccount, ContactRequest, LoginResponse, Mailer,
    NurseRepository, SignUpRequest, SignUpResponse, UpdateUserRequest, UpdateUserResponse,
    UserRepository, VerifyEmailRequest, VerifyEmailResponse,
};
use crate::domain::service_support::{
    email_in_use, map_mailer_error, map_nurse_repository_error, map_user_repository_error,
};
use crate::domain::{
    AccountRole, AccountStatus, AppLinks, EmailAddress, Error, LoginCredentials, Nurse,
    PersonName, User, VerificationToken, hash_password, verify_password,
};

/// Single message for both unknown email and wrong password.
const LOGIN_FAILED: &str = "Incorrect email or password, try again.";

/// Frontend location that tells the caller to check their inbox.
const VERIFICATION_HREF: &str = "/verification";

/// Account service implementing the account driving ports.
#[derive(Clone)]
pub struct AccountService<U, N, M> {
    user_repo: Arc<U>,
    nurse_repo: Arc<N>,
    mailer: Arc<M>,
    links: AppLinks,
    admin_email: EmailAddress,
    admin_mailbox: EmailAddress,
}

impl<U, N, M> AccountService<U, N, M> {
    /// Create a new service over the account repositories and the mailer.
    ///
    /// `admin_email` identifies the administrator account at login;
    /// `admin_mailbox` receives contact-form messages.
    pub fn new(
        user_repo: Arc<U>,
        nurse_repo: Arc<N>,
        mailer: Arc<M>,
        links: AppLinks,
        admin_email: EmailAddress,
        admin_mailbox: EmailAddress,
    ) -> Self {
        Self {
            user_repo,
            nurse_repo,
            mailer,
            links,
            admin_email,
            admin_mailbox,
        }
    }
}

impl<U, N, M> AccountService<U, N, M>
where
    U: UserRepository,
    N: NurseRepository,
    M: Mailer,
{
    fn resolve_user_role(&self, user: &User) -> AccountRole {
        if user.email() == &self.admin_email {
            AccountRole::Admin
        } else {
            AccountRole::Parent
        }
    }

    async fn email_in_use(&self, email: &EmailAddress) -> Result<bool, Error> {
        email_in_use(self.user_repo.as_ref(), self.nurse_repo.as_ref(), email).await
    }

    /// Rotate the user's verification token, persist it, and mail the link.
    ///
    /// The account status stays whatever it was; only the token changes.
    async fn send_user_verification(&self, user: &User) -> Result<(), Error> {
        let token = VerificationToken::generate();
        let updated = User::new(
            user.id(),
            user.email().clone(),
            user.password_hash().to_owned(),
            user.first_name().clone(),
            user.last_name().clone(),
            user.status(),
            Some(token.clone()),
        );
        self.user_repo
            .update(&updated)
            .await
            .map_err(map_user_repository_error)?;

        let link = self.links.verify_link(user.email(), &token);
        self.mailer
            .send(&verification_email(user.email().clone(), &link))
            .await
            .map_err(map_mailer_error)
    }

    /// Nurse-table counterpart of [`Self::send_user_verification`].
    async fn send_nurse_verification(&self, nurse: &Nurse) -> Result<(), Error> {
        let token = VerificationToken::generate();
        let updated = Nurse::new(
            nurse.id(),
            nurse.email().clone(),
            nurse.password_hash().to_owned(),
            nurse.first_name().clone(),
            nurse.last_name().clone(),
            nurse.status(),
            Some(token.clone()),
            nurse.hospital_id(),
        );
        self.nurse_repo
            .update(&updated)
            .await
            .map_err(map_nurse_repository_error)?;

        let link = self.links.verify_link(nurse.email(), &token);
        self.mailer
            .send(&verification_email(nurse.email().clone(), &link))
            .await
            .map_err(map_mailer_error)
    }

    async fn login_nurse(&self, nurse: Nurse, password: &str) -> Result<LoginResponse, Error> {
        if !verify_password(password, nurse.password_hash()) {
            return Err(Error::unauthorized(LOGIN_FAILED));
        }
        if !nurse.is_verified() {
            self.send_nurse_verification(&nurse).await?;
            return Ok(LoginResponse {
                account: None,
                href: VERIFICATION_HREF.to_owned(),
            });
        }
        Ok(LoginResponse {
            account: Some(AuthenticatedAccount {
                account_id: nurse.id(),
                role: AccountRole::Nurse,
            }),
            href: AccountRole::Nurse.home_path().to_owned(),
        })
    }

    async fn login_user(&self, user: User, password: &str) -> Result<LoginResponse, Error> {
        if !verify_password(password, user.password_hash()) {
            return Err(Error::unauthorized(LOGIN_FAILED));
        }
        if !user.is_verified() {
            self.send_user_verification(&user).await?;
            return Ok(LoginResponse {
                account: None,
                href: VERIFICATION_HREF.to_owned(),
            });
        }
        let role = self.resolve_user_role(&user);
        Ok(LoginResponse {
            account: Some(AuthenticatedAccount {
                account_id: user.id(),
                role,
            }),
            href: role.home_path().to_owned(),
        })
    }
}

#[async_trait]
impl<U, N, M> AccountCommand for AccountService<U, N, M>
where
    U: UserRepository,
    N: NurseRepository,
    M: Mailer,
{
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, Error> {
        let email = EmailAddress::new(request.email)
            .map_err(|err| Error::invalid_request(format!("invalid email: {err}")))?;
        let first_name = PersonName::new(request.first_name)
            .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?;
        let last_name = PersonName::new(request.last_name)
            .map_err(|err| Error::invalid_request(format!("invalid last name: {err}")))?;
        if request.password.is_empty() {
            return Err(Error::invalid_request("password must not be empty"));
        }

        if self.email_in_use(&email).await? {
            return Err(Error::conflict("Email already exists."));
        }

        let password_hash = hash_password(&request.password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        let user = User::register(email, password_hash, first_name, last_name);
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_repository_error)?;
        self.send_user_verification(&user).await?;

        Ok(SignUpResponse {
            href: VERIFICATION_HREF.to_owned(),
        })
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, Error> {
        // A nurse account shadows a user account with the same address.
        if let Some(nurse) = self
            .nurse_repo
            .find_by_email(credentials.email())
            .await
            .map_err(map_nurse_repository_error)?
        {
            return self.login_nurse(nurse, credentials.password()).await;
        }

        let Some(user) = self
            .user_repo
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_repository_error)?
        else {
            return Err(Error::unauthorized(LOGIN_FAILED));
        };
        self.login_user(user, credentials.password()).await
    }

    async fn verify_email(
        &self,
        request: VerifyEmailRequest,
    ) -> Result<VerifyEmailResponse, Error> {
        // Token match marks the account verified; user rows take precedence.
        if let Some(user) = self
            .user_repo
            .find_by_token(&request.token)
            .await
            .map_err(map_user_repository_error)?
        {
            let verified = User::new(
                user.id(),
                user.email().clone(),
                user.password_hash().to_owned(),
                user.first_name().clone(),
                user.last_name().clone(),
                AccountStatus::Verified,
                user.verification_token().cloned(),
            );
            self.user_repo
                .update(&verified)
                .await
                .map_err(map_user_repository_error)?;
        } else if let Some(nurse) = self
            .nurse_repo
            .find_by_token(&request.token)
            .await
            .map_err(map_nurse_repository_error)?
        {
            let verified = Nurse::new(
                nurse.id(),
                nurse.email().clone(),
                nurse.password_hash().to_owned(),
                nurse.first_name().clone(),
                nurse.last_name().clone(),
                AccountStatus::Verified,
                nurse.verification_token().cloned(),
                nurse.hospital_id(),
            );
            self.nurse_repo
                .update(&verified)
                .await
                .map_err(map_nurse_repository_error)?;
        }

        // Every visit to the link mails a fresh verification email to the
        // address in the path, whether or not the token matched. An address
        // that parses to no account mails nothing.
        if let Ok(email) = EmailAddress::new(request.email) {
            if let Some(user) = self
                .user_repo
                .find_by_email(&email)
                .await
                .map_err(map_user_repository_error)?
            {
                self.send_user_verification(&user).await?;
            } else if let Some(nurse) = self
                .nurse_repo
                .find_by_email(&email)
                .await
                .map_err(map_nurse_repository_error)?
            {
                self.send_nurse_verification(&nurse).await?;
            }
        }

        Ok(VerifyEmailResponse {
            href: "/status".to_owned(),
        })
    }

    async fn update_user(
        &self,
        request: UpdateUserRequest,
    ) -> Result<UpdateUserResponse, Error> {
        let user = self
            .user_repo
            .find_by_id(request.account_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::not_found(format!("account {} not found", request.account_id)))?;

        if request.password.is_empty() {
            return Err(Error::invalid_request("password must not be empty"));
        }
        let password_hash = hash_password(&request.password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;

        let email = match request.email {
            Some(raw) => EmailAddress::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid email: {err}")))?,
            None => user.email().clone(),
        };
        let email_changed = &email != user.email();
        if email_changed && self.email_in_use(&email).await? {
            return Err(Error::conflict("Email already exists."));
        }

        let first_name = match request.first_name {
            Some(raw) => PersonName::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?,
            None => user.first_name().clone(),
        };
        let last_name = match request.last_name {
            Some(raw) => PersonName::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid last name: {err}")))?,
            None => user.last_name().clone(),
        };

        let status = if email_changed {
            AccountStatus::Unverified
        } else {
            user.status()
        };
        let updated = User::new(
            user.id(),
            email,
            password_hash,
            first_name,
            last_name,
            status,
            user.verification_token().cloned(),
        );
        self.user_repo
            .update(&updated)
            .await
            .map_err(map_user_repository_error)?;

        if email_changed {
            self.send_user_verification(&updated).await?;
            return Ok(UpdateUserResponse {
                href: VERIFICATION_HREF.to_owned(),
                end_session: true,
            });
        }
        Ok(UpdateUserResponse {
            href: String::new(),
            end_session: false,
        })
    }

    async fn send_contact(&self, request: ContactRequest) -> Result<(), Error> {
        let (full_name, email) = match request.role {
            AccountRole::Nurse => {
                let nurse = self
                    .nurse_repo
                    .find_by_id(request.account_id)
                    .await
                    .map_err(map_nurse_repository_error)?
                    .ok_or_else(|| {
                        Error::not_found(format!("account {} not found", request.account_id))
                    })?;
                (nurse.full_name(), nurse.email().clone())
            }
            AccountRole::Parent | AccountRole::Admin => {
                let user = self
                    .user_repo
                    .find_by_id(request.account_id)
                    .await
                    .map_err(map_user_repository_error)?
                    .ok_or_else(|| {
                        Error::not_found(format!("account {} not found", request.account_id))
                    })?;
                (user.full_name(), user.email().clone())
            }
        };

        let message = contact_email(
            self.admin_mailbox.clone(),
            request.role,
            &full_name,
            &email,
            &request.subject,
            &request.message,
        );
        self.mailer
            .send(&message)
            .await
            .map_err(map_mailer_error)
    }
}

#[async_trait]
impl<U, N, M> AccountQuery for AccountService<U, N, M>
where
    U: UserRepository,
    N: NurseRepository,
    M: Mailer,
{
    async fn account_exists(&self, email: &str) -> Result<bool, Error> {
        let Ok(parsed) = EmailAddress::new(email) else {
            return Ok(false);
        };
        self.email_in_use(&parsed).await
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
