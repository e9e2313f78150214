//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod accounts;
pub mod children;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod hospitals;
pub mod nurses;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod vaccinations;
pub mod vaccines;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api/v1` endpoint.
///
/// Services match in registration order, so literal segments must precede
/// routes that capture the same position: `/nurse/home` before
/// `/nurse/{id}`, or "home" binds as the id and fails to parse.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::sign_up)
        .service(accounts::login)
        .service(accounts::logout)
        .service(accounts::verify_email)
        .service(users::probe_account)
        .service(users::update_user)
        .service(users::children_by_email)
        .service(children::get_child)
        .service(children::create_child)
        .service(children::update_child)
        .service(children::delete_child)
        .service(dashboard::nurse_home)
        .service(nurses::get_nurse)
        .service(nurses::list_nurses)
        .service(nurses::create_nurse)
        .service(nurses::update_nurse)
        .service(nurses::reassign_nurse)
        .service(nurses::delete_nurse)
        .service(hospitals::hospital_exists)
        .service(hospitals::list_hospitals)
        .service(hospitals::create_hospital)
        .service(hospitals::hospital_nurses)
        .service(hospitals::hospital_vaccines)
        .service(hospitals::add_hospital_vaccine)
        .service(vaccines::get_vaccine)
        .service(vaccines::list_vaccines)
        .service(vaccines::restock)
        .service(vaccinations::administer_dose)
        .service(vaccinations::vaccination_tracker)
        .service(dashboard::admin_statistics)
        .service(dashboard::parent_home)
        .service(dashboard::send_contact);
}
