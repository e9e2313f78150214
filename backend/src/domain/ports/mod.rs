//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod account_query;
mod child_command;
mod child_query;
mod child_repository;
mod dashboard_query;
mod hospital_command;
mod hospital_query;
mod hospital_repository;
mod mailer;
mod nurse_command;
mod nurse_query;
mod nurse_repository;
mod reminder_repository;
mod user_repository;
mod vaccination_command;
mod vaccination_query;
mod vaccine_query;
mod vaccine_repository;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::{
    AccountCommand, AuthenticatedAccount, ContactRequest, LoginResponse, SignUpRequest,
    SignUpResponse, UpdateUserRequest, UpdateUserResponse, VerifyEmailRequest, VerifyEmailResponse,
};
#[cfg(test)]
pub use account_query::MockAccountQuery;
pub use account_query::AccountQuery;
#[cfg(test)]
pub use child_command::MockChildCommand;
pub use child_command::{ChildCommand, CreateChildRequest, UpdateChildRequest};
#[cfg(test)]
pub use child_query::MockChildQuery;
pub use child_query::{ChildPayload, ChildQuery};
#[cfg(test)]
pub use child_repository::MockChildRepository;
pub use child_repository::{ChildRepository, ChildRepositoryError, DoseAdministeredCount};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::{
    AdminStatistics, DashboardQuery, NurseHome, ParentHome, VaccineStockStatus,
};
#[cfg(test)]
pub use hospital_command::MockHospitalCommand;
pub use hospital_command::{
    AddHospitalVaccineRequest, AddHospitalVaccineResponse, CreateHospitalRequest, HospitalCommand,
    RestockRequest,
};
#[cfg(test)]
pub use hospital_query::MockHospitalQuery;
pub use hospital_query::{HospitalPayload, HospitalQuery, InventoryItem};
#[cfg(test)]
pub use hospital_repository::MockHospitalRepository;
pub use hospital_repository::{
    HospitalInventoryLine, HospitalRepository, HospitalRepositoryError,
};
#[cfg(test)]
pub use mailer::MockMailer;
pub use mailer::{Mailer, MailerError};
#[cfg(test)]
pub use nurse_command::MockNurseCommand;
pub use nurse_command::{
    CreateNurseRequest, NurseCommand, ReassignNurseRequest, UpdateNurseRequest,
    UpdateNurseResponse,
};
#[cfg(test)]
pub use nurse_query::MockNurseQuery;
pub use nurse_query::{NursePayload, NurseProfile, NurseQuery};
#[cfg(test)]
pub use nurse_repository::MockNurseRepository;
pub use nurse_repository::{HospitalNurseCount, NurseRepository, NurseRepositoryError};
#[cfg(test)]
pub use reminder_repository::MockReminderRepository;
pub use reminder_repository::{ReminderRepository, ReminderRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use vaccination_command::MockVaccinationCommand;
pub use vaccination_command::{
    AdministerDoseRequest, AdministerDoseResponse, VaccinationCommand,
};
#[cfg(test)]
pub use vaccination_query::MockVaccinationQuery;
pub use vaccination_query::{TrackerProjection, VaccinationQuery};
#[cfg(test)]
pub use vaccine_query::MockVaccineQuery;
pub use vaccine_query::{
    DoseBrief, DosePayload, VaccineCatalogueView, VaccinePayload, VaccineQuery, VaccineView,
};
#[cfg(test)]
pub use vaccine_repository::MockVaccineRepository;
pub use vaccine_repository::{VaccineRepository, VaccineRepositoryError};
