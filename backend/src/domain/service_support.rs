//! Internal helpers shared by the domain services.
//!
//! Every repository port exposes the same two-variant error shape; these
//! functions give each one a consistent mapping onto the API error type:
//! connection loss is a `503`, anything else a `500`.

use crate::domain::ports::{
    ChildRepositoryError, HospitalRepositoryError, MailerError, NurseRepository,
    NurseRepositoryError, ReminderRepositoryError, UserRepository, UserRepositoryError,
    VaccineRepositoryError,
};
use crate::domain::{EmailAddress, Error};

/// Whether the address is already registered in either accounts table.
///
/// Sign-up and the email-change flows reject such addresses so a nurse row
/// can never silently shadow a freshly created user at login.
pub(crate) async fn email_in_use<U, N>(
    user_repo: &U,
    nurse_repo: &N,
    email: &EmailAddress,
) -> Result<bool, Error>
where
    U: UserRepository,
    N: NurseRepository,
{
    if user_repo
        .find_by_email(email)
        .await
        .map_err(map_user_repository_error)?
        .is_some()
    {
        return Ok(true);
    }
    Ok(nurse_repo
        .find_by_email(email)
        .await
        .map_err(map_nurse_repository_error)?
        .is_some())
}

pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn map_nurse_repository_error(error: NurseRepositoryError) -> Error {
    match error {
        NurseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("nurse repository unavailable: {message}"))
        }
        NurseRepositoryError::Query { message } => {
            Error::internal(format!("nurse repository error: {message}"))
        }
    }
}

pub(crate) fn map_hospital_repository_error(error: HospitalRepositoryError) -> Error {
    match error {
        HospitalRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hospital repository unavailable: {message}"))
        }
        HospitalRepositoryError::Query { message } => {
            Error::internal(format!("hospital repository error: {message}"))
        }
    }
}

pub(crate) fn map_vaccine_repository_error(error: VaccineRepositoryError) -> Error {
    match error {
        VaccineRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("vaccine repository unavailable: {message}"))
        }
        VaccineRepositoryError::Query { message } => {
            Error::internal(format!("vaccine repository error: {message}"))
        }
    }
}

pub(crate) fn map_child_repository_error(error: ChildRepositoryError) -> Error {
    match error {
        ChildRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("child repository unavailable: {message}"))
        }
        ChildRepositoryError::Query { message } => {
            Error::internal(format!("child repository error: {message}"))
        }
    }
}

pub(crate) fn map_reminder_repository_error(error: ReminderRepositoryError) -> Error {
    match error {
        ReminderRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("reminder repository unavailable: {message}"))
        }
        ReminderRepositoryError::Query { message } => {
            Error::internal(format!("reminder repository error: {message}"))
        }
    }
}

pub(crate) fn map_mailer_error(error: MailerError) -> Error {
    match error {
        MailerError::Connection { message } => {
            Error::service_unavailable(format!("mail relay unavailable: {message}"))
        }
        MailerError::Delivery { message } => {
            Error::internal(format!("mail delivery failed: {message}"))
        }
    }
}
