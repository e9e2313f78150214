//! Vaccine catalogue service.
//!
//! Serves vaccine records shaped by role: administrators see the full
//! record including global stock, while parents and nurses get the
//! catalogue view with the dose schedule only.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    DoseBrief, VaccineCatalogueView, VaccinePayload, VaccineQuery, VaccineRepository, VaccineView,
};
use crate::domain::service_support::map_vaccine_repository_error;
use crate::domain::{AccountRole, Error};

/// Vaccine service implementing the catalogue driving port.
#[derive(Clone)]
pub struct VaccineService<V> {
    vaccine_repo: Arc<V>,
}

impl<V> VaccineService<V> {
    /// Create a new service over the vaccine repository.
    pub fn new(vaccine_repo: Arc<V>) -> Self {
        Self { vaccine_repo }
    }
}

#[async_trait]
impl<V> VaccineQuery for VaccineService<V>
where
    V: VaccineRepository,
{
    async fn get_vaccine(&self, id: Uuid, role: AccountRole) -> Result<VaccineView, Error> {
        let vaccine = self
            .vaccine_repo
            .find_by_id(id)
            .await
            .map_err(map_vaccine_repository_error)?
            .ok_or_else(|| Error::not_found(format!("vaccine {id} not found")))?;

        if role == AccountRole::Admin {
            return Ok(VaccineView::Full(VaccinePayload::from(vaccine)));
        }

        let doses = self
            .vaccine_repo
            .list_doses_for_vaccine(vaccine.id())
            .await
            .map_err(map_vaccine_repository_error)?
            .into_iter()
            .map(|dose| DoseBrief {
                denomination: dose.denomination().to_owned(),
                term: dose.term(),
            })
            .collect();
        Ok(VaccineView::Catalogue(VaccineCatalogueView {
            denomination: vaccine.denomination().to_owned(),
            description: vaccine.description().to_owned(),
            doses,
        }))
    }

    async fn list_vaccines(&self) -> Result<Vec<VaccinePayload>, Error> {
        Ok(self
            .vaccine_repo
            .list()
            .await
            .map_err(map_vaccine_repository_error)?
            .into_iter()
            .map(VaccinePayload::from)
            .collect())
    }
}

#[cfg(test)]
#[path = "vaccine_service_tests.rs"]
mod tests;
