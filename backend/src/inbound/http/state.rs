//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, AccountQuery, ChildCommand, ChildQuery, DashboardQuery, HospitalCommand,
    HospitalQuery, NurseCommand, NurseQuery, VaccinationCommand, VaccinationQuery, VaccineQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub accounts_query: Arc<dyn AccountQuery>,
    pub children: Arc<dyn ChildCommand>,
    pub children_query: Arc<dyn ChildQuery>,
    pub nurses: Arc<dyn NurseCommand>,
    pub nurses_query: Arc<dyn NurseQuery>,
    pub hospitals: Arc<dyn HospitalCommand>,
    pub hospitals_query: Arc<dyn HospitalQuery>,
    pub vaccines_query: Arc<dyn VaccineQuery>,
    pub vaccinations: Arc<dyn VaccinationCommand>,
    pub vaccinations_query: Arc<dyn VaccinationQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub accounts_query: Arc<dyn AccountQuery>,
    pub children: Arc<dyn ChildCommand>,
    pub children_query: Arc<dyn ChildQuery>,
    pub nurses: Arc<dyn NurseCommand>,
    pub nurses_query: Arc<dyn NurseQuery>,
    pub hospitals: Arc<dyn HospitalCommand>,
    pub hospitals_query: Arc<dyn HospitalQuery>,
    pub vaccines_query: Arc<dyn VaccineQuery>,
    pub vaccinations: Arc<dyn VaccinationCommand>,
    pub vaccinations_query: Arc<dyn VaccinationQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            accounts,
            accounts_query,
            children,
            children_query,
            nurses,
            nurses_query,
            hospitals,
            hospitals_query,
            vaccines_query,
            vaccinations,
            vaccinations_query,
            dashboard,
        } = ports;
        Self {
            accounts,
            accounts_query,
            children,
            children_query,
            nurses,
            nurses_query,
            hospitals,
            hospitals_query,
            vaccines_query,
            vaccinations,
            vaccinations_query,
            dashboard,
        }
    }
}
