//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    MockAccountCommand, MockAccountQuery, MockChildCommand, MockChildQuery, MockDashboardQuery,
    MockHospitalCommand, MockHospitalQuery, MockNurseCommand, MockNurseQuery,
    MockVaccinationCommand, MockVaccinationQuery, MockVaccineQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mocked port bundle for handler tests.
///
/// Configure only the mocks a test cares about; an unconfigured mock panics
/// when called, which keeps the handler-to-port wiring honest.
#[derive(Default)]
pub struct TestPorts {
    pub accounts: MockAccountCommand,
    pub accounts_query: MockAccountQuery,
    pub children: MockChildCommand,
    pub children_query: MockChildQuery,
    pub nurses: MockNurseCommand,
    pub nurses_query: MockNurseQuery,
    pub hospitals: MockHospitalCommand,
    pub hospitals_query: MockHospitalQuery,
    pub vaccines_query: MockVaccineQuery,
    pub vaccinations: MockVaccinationCommand,
    pub vaccinations_query: MockVaccinationQuery,
    pub dashboard: MockDashboardQuery,
}

impl TestPorts {
    /// Wrap the configured mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            accounts: Arc::new(self.accounts),
            accounts_query: Arc::new(self.accounts_query),
            children: Arc::new(self.children),
            children_query: Arc::new(self.children_query),
            nurses: Arc::new(self.nurses),
            nurses_query: Arc::new(self.nurses_query),
            hospitals: Arc::new(self.hospitals),
            hospitals_query: Arc::new(self.hospitals_query),
            vaccines_query: Arc::new(self.vaccines_query),
            vaccinations: Arc::new(self.vaccinations),
            vaccinations_query: Arc::new(self.vaccinations_query),
            dashboard: Arc::new(self.dashboard),
        })
    }
}
