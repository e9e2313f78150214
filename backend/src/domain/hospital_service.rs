//! Hospital and inventory service.
//!
//! Implements hospital creation, shelf management, and inventory reads over
//! the hospital and vaccine repositories. Stock moves in two ledgers: each
//! hospital keeps a per-vaccine shelf count, and every vaccine keeps a
//! global count across all hospitals. Linking a vaccine credits only the
//! global ledger; restocking credits both.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AddHospitalVaccineRequest, AddHospitalVaccineResponse, CreateHospitalRequest, HospitalCommand,
    HospitalPayload, HospitalQuery, HospitalRepository, InventoryItem, RestockRequest,
    VaccineRepository,
};
use crate::domain::service_support::{map_hospital_repository_error, map_vaccine_repository_error};
use crate::domain::{Error, Hospital, HospitalVaccine, Vaccine};

/// Hospital service implementing the hospital driving ports.
#[derive(Clone)]
pub struct HospitalService<H, V> {
    hospital_repo: Arc<H>,
    vaccine_repo: Arc<V>,
}

impl<H, V> HospitalService<H, V> {
    /// Create a new service over the hospital and vaccine repositories.
    pub fn new(hospital_repo: Arc<H>, vaccine_repo: Arc<V>) -> Self {
        Self {
            hospital_repo,
            vaccine_repo,
        }
    }
}

impl<H, V> HospitalService<H, V>
where
    H: HospitalRepository,
    V: VaccineRepository,
{
    async fn fetch_vaccine(&self, id: Uuid) -> Result<Vaccine, Error> {
        self.vaccine_repo
            .find_by_id(id)
            .await
            .map_err(map_vaccine_repository_error)?
            .ok_or_else(|| Error::not_found(format!("vaccine {id} not found")))
    }
}

#[async_trait]
impl<H, V> HospitalCommand for HospitalService<H, V>
where
    H: HospitalRepository,
    V: VaccineRepository,
{
    async fn create_hospital(&self, request: CreateHospitalRequest) -> Result<(), Error> {
        let hospital = Hospital::create(request.name)
            .map_err(|err| Error::invalid_request(format!("invalid hospital name: {err}")))?;
        self.hospital_repo
            .insert(&hospital)
            .await
            .map_err(map_hospital_repository_error)?;

        // Every known vaccine starts on the new hospital's shelf at zero so
        // restocking never has to create the row.
        let vaccines = self
            .vaccine_repo
            .list()
            .await
            .map_err(map_vaccine_repository_error)?;
        for vaccine in vaccines {
            let link = HospitalVaccine::link(hospital.id(), vaccine.id());
            self.hospital_repo
                .insert_link(&link)
                .await
                .map_err(map_hospital_repository_error)?;
        }
        Ok(())
    }

    async fn add_vaccine(
        &self,
        request: AddHospitalVaccineRequest,
    ) -> Result<AddHospitalVaccineResponse, Error> {
        self.hospital_repo
            .find_by_id(request.hospital_id)
            .await
            .map_err(map_hospital_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("hospital {} not found", request.hospital_id))
            })?;
        self.fetch_vaccine(request.vaccine_id).await?;

        let existing = self
            .hospital_repo
            .find_link(request.hospital_id, request.vaccine_id)
            .await
            .map_err(map_hospital_repository_error)?;
        if existing.is_some() {
            return Ok(AddHospitalVaccineResponse {
                already_linked: true,
            });
        }

        let link = HospitalVaccine::link(request.hospital_id, request.vaccine_id);
        self.hospital_repo
            .insert_link(&link)
            .await
            .map_err(map_hospital_repository_error)?;
        // The delivered amount lands in the global ledger; the shelf count
        // stays at zero until a restock.
        self.vaccine_repo
            .adjust_stock(request.vaccine_id, request.stock)
            .await
            .map_err(map_vaccine_repository_error)?;
        Ok(AddHospitalVaccineResponse {
            already_linked: false,
        })
    }

    async fn restock(&self, request: RestockRequest) -> Result<(), Error> {
        self.fetch_vaccine(request.vaccine_id).await?;
        self.hospital_repo
            .adjust_link_quantity(request.hospital_id, request.vaccine_id, request.quantity)
            .await
            .map_err(map_hospital_repository_error)?;
        self.vaccine_repo
            .adjust_stock(request.vaccine_id, request.quantity)
            .await
            .map_err(map_vaccine_repository_error)
    }
}

#[async_trait]
impl<H, V> HospitalQuery for HospitalService<H, V>
where
    H: HospitalRepository,
    V: VaccineRepository,
{
    async fn hospital_exists(&self, name: &str) -> Result<bool, Error> {
        Ok(self
            .hospital_repo
            .find_by_name(name)
            .await
            .map_err(map_hospital_repository_error)?
            .is_some())
    }

    async fn list_hospitals(&self) -> Result<Vec<HospitalPayload>, Error> {
        Ok(self
            .hospital_repo
            .list()
            .await
            .map_err(map_hospital_repository_error)?
            .into_iter()
            .map(HospitalPayload::from)
            .collect())
    }

    async fn inventory(&self, hospital_id: Uuid) -> Result<Vec<InventoryItem>, Error> {
        Ok(self
            .hospital_repo
            .list_inventory(hospital_id)
            .await
            .map_err(map_hospital_repository_error)?
            .into_iter()
            .map(|line| InventoryItem {
                denomination: line.denomination,
                quantity: line.quantity,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "hospital_service_tests.rs"]
mod tests;
