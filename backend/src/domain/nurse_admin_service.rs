//! Nurse administration service.
//!
//! Implements nurse provisioning, credential updates, hospital assignment,
//! and the nurse directory over the nurse, user, and hospital repositories
//! and the mailer port. Credentials are always delivered by email: a freshly
//! created nurse receives them with a verification link, and later admin
//! edits re-send them with either a login or a verification link depending
//! on the account state.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::email::{
    nurse_credentials_unverified_email, nurse_credentials_verified_email, verification_email,
};
use crate::domain::ports::{
    CreateNurseRequest, HospitalRepository, Mailer, NurseCommand, NursePayload, NurseProfile,
    NurseQuery, NurseRepository, ReassignNurseRequest, UpdateNurseRequest, UpdateNurseResponse,
    UserRepository,
};
use crate::domain::service_support::{
    email_in_use, map_hospital_repository_error, map_mailer_error, map_nurse_repository_error,
};
use crate::domain::{
    AccountStatus, AppLinks, EmailAddress, Error, Nurse, PersonName, VerificationToken,
    hash_password,
};

/// Frontend location that tells the caller to check their inbox.
const VERIFICATION_HREF: &str = "/verification";

/// Nurse administration service implementing the nurse driving ports.
#[derive(Clone)]
pub struct NurseAdminService<N, U, H, M> {
    nurse_repo: Arc<N>,
    user_repo: Arc<U>,
    hospital_repo: Arc<H>,
    mailer: Arc<M>,
    links: AppLinks,
}

impl<N, U, H, M> NurseAdminService<N, U, H, M> {
    /// Create a new service over the nurse-facing repositories and the mailer.
    pub fn new(
        nurse_repo: Arc<N>,
        user_repo: Arc<U>,
        hospital_repo: Arc<H>,
        mailer: Arc<M>,
        links: AppLinks,
    ) -> Self {
        Self {
            nurse_repo,
            user_repo,
            hospital_repo,
            mailer,
            links,
        }
    }
}

impl<N, U, H, M> NurseAdminService<N, U, H, M>
where
    N: NurseRepository,
    U: UserRepository,
    H: HospitalRepository,
    M: Mailer,
{
    async fn fetch_nurse(&self, id: Uuid) -> Result<Nurse, Error> {
        self.nurse_repo
            .find_by_id(id)
            .await
            .map_err(map_nurse_repository_error)?
            .ok_or_else(|| Error::not_found(format!("nurse {id} not found")))
    }
}

#[async_trait]
impl<N, U, H, M> NurseCommand for NurseAdminService<N, U, H, M>
where
    N: NurseRepository,
    U: UserRepository,
    H: HospitalRepository,
    M: Mailer,
{
    async fn create_nurse(&self, request: CreateNurseRequest) -> Result<(), Error> {
        let email = EmailAddress::new(request.email)
            .map_err(|err| Error::invalid_request(format!("invalid email: {err}")))?;
        let first_name = PersonName::new(request.first_name)
            .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?;
        let last_name = PersonName::new(request.last_name)
            .map_err(|err| Error::invalid_request(format!("invalid last name: {err}")))?;
        if request.password.is_empty() {
            return Err(Error::invalid_request("password must not be empty"));
        }
        if email_in_use(self.user_repo.as_ref(), self.nurse_repo.as_ref(), &email).await? {
            return Err(Error::conflict("Email already exists."));
        }

        let password_hash = hash_password(&request.password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        // A nurse never verifies through sign-up, so the row carries its
        // verification token from the start.
        let token = VerificationToken::generate();
        let nurse = Nurse::new(
            Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            AccountStatus::Unverified,
            Some(token.clone()),
            request.hospital_id,
        );
        self.nurse_repo
            .insert(&nurse)
            .await
            .map_err(map_nurse_repository_error)?;

        let link = self.links.verify_link(nurse.email(), &token);
        let message = nurse_credentials_unverified_email(
            nurse.email().clone(),
            nurse.first_name().as_ref(),
            &request.password,
            &link,
        );
        self.mailer.send(&message).await.map_err(map_mailer_error)
    }

    async fn update_nurse(
        &self,
        request: UpdateNurseRequest,
    ) -> Result<UpdateNurseResponse, Error> {
        let nurse = self.fetch_nurse(request.id).await?;
        if request.password.is_empty() {
            return Err(Error::invalid_request("password must not be empty"));
        }
        let password_hash = hash_password(&request.password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;

        let email = match request.email {
            Some(raw) => EmailAddress::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid email: {err}")))?,
            None => nurse.email().clone(),
        };
        let email_changed = &email != nurse.email();
        if email_changed
            && email_in_use(self.user_repo.as_ref(), self.nurse_repo.as_ref(), &email).await?
        {
            return Err(Error::conflict("Email already exists."));
        }

        let first_name = match request.first_name {
            Some(raw) => PersonName::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?,
            None => nurse.first_name().clone(),
        };
        let last_name = match request.last_name {
            Some(raw) => PersonName::new(raw)
                .map_err(|err| Error::invalid_request(format!("invalid last name: {err}")))?,
            None => nurse.last_name().clone(),
        };

        // "0" is the directory form's placeholder for "leave unchanged".
        let hospital_id = match request.hospital_id.as_deref() {
            None | Some("0") => nurse.hospital_id(),
            Some(raw) => Some(
                Uuid::parse_str(raw)
                    .map_err(|err| Error::invalid_request(format!("invalid hospital id: {err}")))?,
            ),
        };

        // A changed address always re-verifies; an unverified nurse stays
        // unverified. Either way a fresh token backs the mailed link.
        let needs_verification = email_changed || !nurse.is_verified();
        let token = needs_verification.then(VerificationToken::generate);
        let status = if needs_verification {
            AccountStatus::Unverified
        } else {
            nurse.status()
        };
        let stored_token = token.clone().or_else(|| nurse.verification_token().cloned());

        let updated = Nurse::new(
            nurse.id(),
            email,
            password_hash,
            first_name,
            last_name,
            status,
            stored_token,
            hospital_id,
        );
        self.nurse_repo
            .update(&updated)
            .await
            .map_err(map_nurse_repository_error)?;

        let is_self = request.actor_id == request.id;
        match (is_self, token) {
            (true, Some(token)) => {
                let link = self.links.verify_link(updated.email(), &token);
                let message = verification_email(updated.email().clone(), &link);
                self.mailer.send(&message).await.map_err(map_mailer_error)?;
                Ok(UpdateNurseResponse {
                    href: Some(VERIFICATION_HREF.to_owned()),
                    end_session: true,
                })
            }
            (true, None) => Ok(UpdateNurseResponse {
                href: Some(String::new()),
                end_session: false,
            }),
            (false, Some(token)) => {
                let link = self.links.verify_link(updated.email(), &token);
                let message = nurse_credentials_unverified_email(
                    updated.email().clone(),
                    updated.first_name().as_ref(),
                    &request.password,
                    &link,
                );
                self.mailer.send(&message).await.map_err(map_mailer_error)?;
                Ok(UpdateNurseResponse {
                    href: None,
                    end_session: false,
                })
            }
            (false, None) => {
                let message = nurse_credentials_verified_email(
                    updated.email().clone(),
                    updated.first_name().as_ref(),
                    &request.password,
                    &self.links.login_link(),
                );
                self.mailer.send(&message).await.map_err(map_mailer_error)?;
                Ok(UpdateNurseResponse {
                    href: None,
                    end_session: false,
                })
            }
        }
    }

    async fn reassign_hospital(&self, request: ReassignNurseRequest) -> Result<(), Error> {
        let nurse = self.fetch_nurse(request.id).await?;
        let updated = Nurse::new(
            nurse.id(),
            nurse.email().clone(),
            nurse.password_hash().to_owned(),
            nurse.first_name().clone(),
            nurse.last_name().clone(),
            nurse.status(),
            nurse.verification_token().cloned(),
            Some(request.hospital_id),
        );
        self.nurse_repo
            .update(&updated)
            .await
            .map_err(map_nurse_repository_error)
    }

    async fn delete_nurse(&self, id: Uuid) -> Result<(), Error> {
        self.nurse_repo
            .delete(id)
            .await
            .map_err(map_nurse_repository_error)
    }
}

#[async_trait]
impl<N, U, H, M> NurseQuery for NurseAdminService<N, U, H, M>
where
    N: NurseRepository,
    U: UserRepository,
    H: HospitalRepository,
    M: Mailer,
{
    async fn get_profile(&self, id: Uuid) -> Result<NurseProfile, Error> {
        let nurse = self.fetch_nurse(id).await?;
        let hospital = match nurse.hospital_id() {
            Some(hospital_id) => self
                .hospital_repo
                .find_by_id(hospital_id)
                .await
                .map_err(map_hospital_repository_error)?
                .map(|hospital| hospital.name().to_owned())
                .unwrap_or_default(),
            None => String::new(),
        };
        Ok(NurseProfile {
            email: nurse.email().as_ref().to_owned(),
            first_name: nurse.first_name().as_ref().to_owned(),
            last_name: nurse.last_name().as_ref().to_owned(),
            hospital,
        })
    }

    async fn list_nurses(&self) -> Result<Vec<NursePayload>, Error> {
        Ok(self
            .nurse_repo
            .list()
            .await
            .map_err(map_nurse_repository_error)?
            .into_iter()
            .map(NursePayload::from)
            .collect())
    }

    async fn list_by_hospital(&self, hospital_id: Uuid) -> Result<Vec<NursePayload>, Error> {
        Ok(self
            .nurse_repo
            .list_by_hospital(hospital_id)
            .await
            .map_err(map_nurse_repository_error)?
            .into_iter()
            .map(NursePayload::from)
            .collect())
    }
}

#[cfg(test)]
#[path = "nurse_admin_service_tests.rs"]
mod tests;
