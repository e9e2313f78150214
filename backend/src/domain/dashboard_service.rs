//! Dashboard service.
//!
//! Assembles the role-specific landing pages: aggregate counters and stock
//! breakdowns for the administrator, the child list plus dose schedule for
//! parents, and the assigned hospital's inventory plus the full child roster
//! for nurses.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AdminStatistics, ChildPayload, ChildRepository, DashboardQuery, DosePayload,
    HospitalInventoryLine, HospitalRepository, NurseHome, NurseRepository, ParentHome,
    UserRepository, VaccineRepository, VaccineStockStatus,
};
use crate::domain::service_support::{
    map_child_repository_error, map_hospital_repository_error, map_nurse_repository_error,
    map_user_repository_error, map_vaccine_repository_error,
};
use crate::domain::Error;

/// Dashboard service implementing the dashboard driving port.
#[derive(Clone)]
pub struct DashboardService<U, N, H, V, C> {
    user_repo: Arc<U>,
    nurse_repo: Arc<N>,
    hospital_repo: Arc<H>,
    vaccine_repo: Arc<V>,
    child_repo: Arc<C>,
}

impl<U, N, H, V, C> DashboardService<U, N, H, V, C> {
    /// Create a new service over the five repositories the pages draw from.
    pub fn new(
        user_repo: Arc<U>,
        nurse_repo: Arc<N>,
        hospital_repo: Arc<H>,
        vaccine_repo: Arc<V>,
        child_repo: Arc<C>,
    ) -> Self {
        Self {
            user_repo,
            nurse_repo,
            hospital_repo,
            vaccine_repo,
            child_repo,
        }
    }
}

impl<U, N, H, V, C> DashboardService<U, N, H, V, C>
where
    U: UserRepository,
    N: NurseRepository,
    H: HospitalRepository,
    V: VaccineRepository,
    C: ChildRepository,
{
    async fn dose_schedule(&self) -> Result<Vec<DosePayload>, Error> {
        Ok(self
            .vaccine_repo
            .list_doses()
            .await
            .map_err(map_vaccine_repository_error)?
            .into_iter()
            .map(DosePayload::from)
            .collect())
    }
}

#[async_trait]
impl<U, N, H, V, C> DashboardQuery for DashboardService<U, N, H, V, C>
where
    U: UserRepository,
    N: NurseRepository,
    H: HospitalRepository,
    V: VaccineRepository,
    C: ChildRepository,
{
    async fn statistics(&self) -> Result<AdminStatistics, Error> {
        let nurses = self
            .nurse_repo
            .count()
            .await
            .map_err(map_nurse_repository_error)?;
        // The administrator signs in through a user row, so the parent count
        // leaves one out. On a table with no admin row yet (fresh database)
        // the clamp keeps the count at zero rather than reporting -1.
        let users = self
            .user_repo
            .count()
            .await
            .map_err(map_user_repository_error)?;
        let parents = (users - 1).max(0);
        let children = self
            .child_repo
            .count()
            .await
            .map_err(map_child_repository_error)?;
        let nurses_per_hospital = self
            .nurse_repo
            .count_by_hospital()
            .await
            .map_err(map_nurse_repository_error)?;
        let stock_levels = self
            .vaccine_repo
            .list()
            .await
            .map_err(map_vaccine_repository_error)?
            .into_iter()
            .map(|vaccine| VaccineStockStatus {
                denomination: vaccine.denomination().to_owned(),
                stock: vaccine.stock(),
                status: vaccine.stock_level(),
            })
            .collect();
        let administered = self
            .child_repo
            .count_administered_per_dose()
            .await
            .map_err(map_child_repository_error)?;

        Ok(AdminStatistics {
            nurses,
            parents,
            children,
            nurses_per_hospital,
            stock_levels,
            administered,
        })
    }

    async fn parent_home(&self, parent_id: Uuid) -> Result<ParentHome, Error> {
        let children = self
            .child_repo
            .list_by_parent(parent_id)
            .await
            .map_err(map_child_repository_error)?
            .into_iter()
            .map(ChildPayload::from)
            .collect();
        Ok(ParentHome {
            children,
            doses: self.dose_schedule().await?,
        })
    }

    async fn nurse_home(&self, nurse_id: Uuid) -> Result<NurseHome, Error> {
        let nurse = self
            .nurse_repo
            .find_by_id(nurse_id)
            .await
            .map_err(map_nurse_repository_error)?
            .ok_or_else(|| Error::not_found(format!("nurse {nurse_id} not found")))?;

        let (hospital_name, inventory): (String, Vec<HospitalInventoryLine>) =
            match nurse.hospital_id() {
                Some(hospital_id) => {
                    let name = self
                        .hospital_repo
                        .find_by_id(hospital_id)
                        .await
                        .map_err(map_hospital_repository_error)?
                        .map(|hospital| hospital.name().to_owned())
                        .unwrap_or_default();
                    let inventory = self
                        .hospital_repo
                        .list_inventory(hospital_id)
                        .await
                        .map_err(map_hospital_repository_error)?;
                    (name, inventory)
                }
                None => (String::new(), Vec::new()),
            };

        let children = self
            .child_repo
            .list()
            .await
            .map_err(map_child_repository_error)?
            .into_iter()
            .map(ChildPayload::from)
            .collect();
        Ok(NurseHome {
            hospital_name,
            inventory,
            children,
            doses: self.dose_schedule().await?,
        })
    }
}

#[cfg(test)]
#[path = "dashboard_service_tests.rs"]
mod tests;
