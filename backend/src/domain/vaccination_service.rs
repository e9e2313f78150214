//! Vaccination service.
//!
//! Records administered doses and serves the due-children tracker. A
//! recorded dose debits both stock ledgers; recording the same dose twice
//! reports the duplicate and changes nothing.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    AdministerDoseRequest, AdministerDoseResponse, ChildRepository, HospitalRepository,
    TrackerProjection, VaccinationCommand, VaccinationQuery, VaccineRepository,
};
use crate::domain::service_support::{
    map_child_repository_error, map_hospital_repository_error, map_vaccine_repository_error,
};
use crate::domain::{Dose, Error};

/// Vaccination service implementing the vaccination driving ports.
#[derive(Clone)]
pub struct VaccinationService<C, V, H> {
    child_repo: Arc<C>,
    vaccine_repo: Arc<V>,
    hospital_repo: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<C, V, H> VaccinationService<C, V, H> {
    /// Create a new service over the child, vaccine, and hospital
    /// repositories.
    pub fn new(
        child_repo: Arc<C>,
        vaccine_repo: Arc<V>,
        hospital_repo: Arc<H>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            child_repo,
            vaccine_repo,
            hospital_repo,
            clock,
        }
    }
}

impl<C, V, H> VaccinationService<C, V, H>
where
    C: ChildRepository,
    V: VaccineRepository,
    H: HospitalRepository,
{
    async fn fetch_dose(&self, id: Uuid) -> Result<Dose, Error> {
        self.vaccine_repo
            .find_dose_by_id(id)
            .await
            .map_err(map_vaccine_repository_error)?
            .ok_or_else(|| Error::not_found(format!("dose {id} not found")))
    }
}

#[async_trait]
impl<C, V, H> VaccinationCommand for VaccinationService<C, V, H>
where
    C: ChildRepository,
    V: VaccineRepository,
    H: HospitalRepository,
{
    async fn administer_dose(
        &self,
        request: AdministerDoseRequest,
    ) -> Result<AdministerDoseResponse, Error> {
        self.child_repo
            .find_by_id(request.child_id)
            .await
            .map_err(map_child_repository_error)?
            .ok_or_else(|| Error::not_found(format!("child {} not found", request.child_id)))?;
        let dose = self.fetch_dose(request.dose_id).await?;

        let administered = self
            .child_repo
            .is_administered(request.child_id, request.dose_id)
            .await
            .map_err(map_child_repository_error)?;
        if administered {
            return Ok(AdministerDoseResponse {
                already_administered: true,
            });
        }

        self.child_repo
            .record_administered(request.child_id, request.dose_id)
            .await
            .map_err(map_child_repository_error)?;
        self.vaccine_repo
            .adjust_stock(dose.vaccine_id(), -1)
            .await
            .map_err(map_vaccine_repository_error)?;
        self.hospital_repo
            .adjust_link_quantity(request.hospital_id, dose.vaccine_id(), -1)
            .await
            .map_err(map_hospital_repository_error)?;
        Ok(AdministerDoseResponse {
            already_administered: false,
        })
    }
}

#[async_trait]
impl<C, V, H> VaccinationQuery for VaccinationService<C, V, H>
where
    C: ChildRepository,
    V: VaccineRepository,
    H: HospitalRepository,
{
    async fn tracker(&self, dose_id: Uuid, range: i32) -> Result<TrackerProjection, Error> {
        let dose = self.fetch_dose(dose_id).await?;
        let children = self
            .child_repo
            .list()
            .await
            .map_err(map_child_repository_error)?;

        // A child is due once their age plus the look-ahead range reaches
        // the dose's term.
        let today = self.clock.utc().date_naive();
        let due = children
            .iter()
            .filter(|child| child.age_in_days(today) + i64::from(range) >= i64::from(dose.term()))
            .count();
        Ok(TrackerProjection {
            dose: dose.denomination().to_owned(),
            vaccinations: i64::try_from(due).unwrap_or(i64::MAX),
        })
    }
}

#[cfg(test)]
#[path = "vaccination_service_tests.rs"]
mod tests;
