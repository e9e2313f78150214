//! Builders wiring repository-backed services into HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::{
    AccountService, ChildService, DashboardService, HospitalService, NurseAdminService,
    VaccinationService, VaccineService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DieselChildRepository, DieselHospitalRepository, DieselNurseRepository, DieselUserRepository,
    DieselVaccineRepository,
};

use super::ServerConfig;

/// Build the shared HTTP state over the Diesel repositories and the SMTP
/// mailer. Each service holds its own `Arc` handles to the repositories, so
/// the adapters are constructed once and shared.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let pool = &config.db_pool;
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let nurses = Arc::new(DieselNurseRepository::new(pool.clone()));
    let children = Arc::new(DieselChildRepository::new(pool.clone()));
    let hospitals = Arc::new(DieselHospitalRepository::new(pool.clone()));
    let vaccines = Arc::new(DieselVaccineRepository::new(pool.clone()));
    let mailer = config.mailer.clone();
    let context = &config.context;

    let accounts = Arc::new(AccountService::new(
        users.clone(),
        nurses.clone(),
        mailer.clone(),
        context.links.clone(),
        context.admin_email.clone(),
        context.admin_mailbox.clone(),
    ));
    let child_service = Arc::new(ChildService::new(children.clone(), users.clone()));
    let nurse_service = Arc::new(NurseAdminService::new(
        nurses.clone(),
        users.clone(),
        hospitals.clone(),
        mailer,
        context.links.clone(),
    ));
    let hospital_service = Arc::new(HospitalService::new(hospitals.clone(), vaccines.clone()));
    let vaccine_service = Arc::new(VaccineService::new(vaccines.clone()));
    let vaccination_service = Arc::new(VaccinationService::new(
        children.clone(),
        vaccines.clone(),
        hospitals.clone(),
        Arc::new(mockable::DefaultClock),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        users, nurses, hospitals, vaccines, children,
    ));

    web::Data::new(HttpState::new(HttpStatePorts {
        accounts: accounts.clone(),
        accounts_query: accounts,
        children: child_service.clone(),
        children_query: child_service,
        nurses: nurse_service.clone(),
        nurses_query: nurse_service,
        hospitals: hospital_service.clone(),
        hospitals_query: hospital_service,
        vaccines_query: vaccine_service,
        vaccinations: vaccination_service.clone(),
        vaccinations_query: vaccination_service,
        dashboard: dashboard_service,
    }))
}
