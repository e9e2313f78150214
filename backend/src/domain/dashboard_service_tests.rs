//! Tests for the dashboard service.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    DoseAdministeredCount, HospitalNurseCount, MockChildRepository, MockHospitalRepository,
    MockNurseRepository, MockUserRepository, MockVaccineRepository, NurseRepositoryError,
};
use crate::domain::{
    AccountStatus, Child, Dose, EmailAddress, ErrorCode, Hospital, Nurse, PersonName, StockLevel,
    Vaccine,
};

fn person(raw: &str) -> PersonName {
    PersonName::new(raw).expect("valid name")
}

fn nurse_assigned_to(hospital_id: Option<Uuid>) -> Nurse {
    Nurse::new(
        Uuid::new_v4(),
        EmailAddress::new("ward@example.com").expect("valid email"),
        "stored-hash".to_owned(),
        person("Florence"),
        person("Nightingale"),
        AccountStatus::Verified,
        None,
        hospital_id,
    )
}

fn child_named(first_name: &str, parent_id: Uuid) -> Child {
    Child::register(
        person(first_name),
        person("Lovelace"),
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        parent_id,
    )
}

fn vaccine_with(denomination: &str, stock: i32) -> Vaccine {
    Vaccine::create(denomination.to_owned(), "protects".to_owned(), stock).expect("valid vaccine")
}

fn dose_named(denomination: &str) -> Dose {
    Dose::create(denomination.to_owned(), 365, Uuid::new_v4()).expect("valid dose")
}

fn service(
    user_repo: MockUserRepository,
    nurse_repo: MockNurseRepository,
    hospital_repo: MockHospitalRepository,
    vaccine_repo: MockVaccineRepository,
    child_repo: MockChildRepository,
) -> DashboardService<
    MockUserRepository,
    MockNurseRepository,
    MockHospitalRepository,
    MockVaccineRepository,
    MockChildRepository,
> {
    DashboardService::new(
        Arc::new(user_repo),
        Arc::new(nurse_repo),
        Arc::new(hospital_repo),
        Arc::new(vaccine_repo),
        Arc::new(child_repo),
    )
}

#[tokio::test]
async fn statistics_aggregates_counts_and_stock_levels() {
    let mut user_repo = MockUserRepository::new();
    user_repo.expect_count().times(1).return_once(|| Ok(5));
    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo.expect_count().times(1).return_once(|| Ok(3));
    nurse_repo
        .expect_count_by_hospital()
        .times(1)
        .return_once(|| {
            Ok(vec![HospitalNurseCount {
                hospital_name: "General Hospital".to_owned(),
                nurses: 3,
            }])
        });
    let mut vaccine_repo = MockVaccineRepository::new();
    vaccine_repo
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![vaccine_with("MMR", 600), vaccine_with("Polio", 40)]));
    let mut child_repo = MockChildRepository::new();
    child_repo.expect_count().times(1).return_once(|| Ok(7));
    child_repo
        .expect_count_administered_per_dose()
        .times(1)
        .return_once(|| {
            Ok(vec![DoseAdministeredCount {
                denomination: "MMR 1st dose".to_owned(),
                children: 2,
            }])
        });

    let statistics = service(
        user_repo,
        nurse_repo,
        MockHospitalRepository::new(),
        vaccine_repo,
        child_repo,
    )
    .statistics()
    .await
    .expect("statistics assembled");

    assert_eq!(statistics.nurses, 3);
    assert_eq!(statistics.parents, 4);
    assert_eq!(statistics.children, 7);
    assert_eq!(statistics.nurses_per_hospital.len(), 1);
    assert_eq!(
        statistics.stock_levels,
        vec![
            VaccineStockStatus {
                denomination: "MMR".to_owned(),
                stock: 600,
                status: StockLevel::Adequate,
            },
            VaccineStockStatus {
                denomination: "Polio".to_owned(),
                stock: 40,
                status: StockLevel::Low,
            },
        ]
    );
    assert_eq!(statistics.administered.len(), 1);
}

#[tokio::test]
async fn statistics_clamps_the_parent_count_at_zero() {
    let mut user_repo = MockUserRepository::new();
    user_repo.expect_count().times(1).return_once(|| Ok(0));
    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo.expect_count().times(1).return_once(|| Ok(0));
    nurse_repo
        .expect_count_by_hospital()
        .times(1)
        .return_once(|| Ok(Vec::new()));
    let mut vaccine_repo = MockVaccineRepository::new();
    vaccine_repo
        .expect_list()
        .times(1)
        .return_once(|| Ok(Vec::new()));
    let mut child_repo = MockChildRepository::new();
    child_repo.expect_count().times(1).return_once(|| Ok(0));
    child_repo
        .expect_count_administered_per_dose()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let statistics = service(
        user_repo,
        nurse_repo,
        MockHospitalRepository::new(),
        vaccine_repo,
        child_repo,
    )
    .statistics()
    .await
    .expect("statistics assembled");

    assert_eq!(statistics.parents, 0);
}

#[tokio::test]
async fn parent_home_lists_own_children_with_the_schedule() {
    let parent_id = Uuid::new_v4();
    let mut child_repo = MockChildRepository::new();
    child_repo
        .expect_list_by_parent()
        .withf(move |id: &Uuid| *id == parent_id)
        .times(1)
        .return_once(move |_| Ok(vec![child_named("Ada", parent_id)]));
    let mut vaccine_repo = MockVaccineRepository::new();
    vaccine_repo
        .expect_list_doses()
        .times(1)
        .return_once(|| Ok(vec![dose_named("MMR 1st dose"), dose_named("Polio 1st dose")]));

    let home = service(
        MockUserRepository::new(),
        MockNurseRepository::new(),
        MockHospitalRepository::new(),
        vaccine_repo,
        child_repo,
    )
    .parent_home(parent_id)
    .await
    .expect("parent home assembled");

    assert_eq!(home.children.len(), 1);
    assert_eq!(home.children[0].first_name, "Ada");
    assert_eq!(home.doses.len(), 2);
}

#[tokio::test]
async fn nurse_home_resolves_the_assigned_hospital() {
    let hospital = Hospital::create("General Hospital".to_owned()).expect("valid hospital");
    let hospital_id = hospital.id();
    let nurse = nurse_assigned_to(Some(hospital_id));
    let nurse_id = nurse.id();

    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(nurse)));
    let mut hospital_repo = MockHospitalRepository::new();
    hospital_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(hospital)));
    hospital_repo
        .expect_list_inventory()
        .withf(move |id: &Uuid| *id == hospital_id)
        .times(1)
        .return_once(move |_| {
            Ok(vec![HospitalInventoryLine {
                denomination: "MMR".to_owned(),
                hospital_id,
                vaccine_id: Uuid::new_v4(),
                quantity: 12,
            }])
        });
    let mut child_repo = MockChildRepository::new();
    child_repo
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![child_named("Ada", Uuid::new_v4())]));
    let mut vaccine_repo = MockVaccineRepository::new();
    vaccine_repo
        .expect_list_doses()
        .times(1)
        .return_once(|| Ok(vec![dose_named("MMR 1st dose")]));

    let home = service(
        MockUserRepository::new(),
        nurse_repo,
        hospital_repo,
        vaccine_repo,
        child_repo,
    )
    .nurse_home(nurse_id)
    .await
    .expect("nurse home assembled");

    assert_eq!(home.hospital_name, "General Hospital");
    assert_eq!(home.inventory.len(), 1);
    assert_eq!(home.children.len(), 1);
    assert_eq!(home.doses.len(), 1);
}

#[tokio::test]
async fn nurse_home_without_assignment_serves_an_empty_shelf() {
    let nurse = nurse_assigned_to(None);
    let nurse_id = nurse.id();

    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(nurse)));
    let mut hospital_repo = MockHospitalRepository::new();
    hospital_repo.expect_find_by_id().times(0);
    hospital_repo.expect_list_inventory().times(0);
    let mut child_repo = MockChildRepository::new();
    child_repo.expect_list().times(1).return_once(|| Ok(Vec::new()));
    let mut vaccine_repo = MockVaccineRepository::new();
    vaccine_repo
        .expect_list_doses()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let home = service(
        MockUserRepository::new(),
        nurse_repo,
        hospital_repo,
        vaccine_repo,
        child_repo,
    )
    .nurse_home(nurse_id)
    .await
    .expect("nurse home assembled");

    assert_eq!(home.hospital_name, "");
    assert!(home.inventory.is_empty());
}

#[tokio::test]
async fn nurse_home_requires_the_nurse() {
    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let error = service(
        MockUserRepository::new(),
        nurse_repo,
        MockHospitalRepository::new(),
        MockVaccineRepository::new(),
        MockChildRepository::new(),
    )
    .nurse_home(Uuid::new_v4())
    .await
    .expect_err("unknown nurse");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn connection_failures_surface_as_service_unavailable() {
    let mut nurse_repo = MockNurseRepository::new();
    nurse_repo
        .expect_count()
        .times(1)
        .return_once(|| Err(NurseRepositoryError::connection("pool exhausted")));

    let error = service(
        MockUserRepository::new(),
        nurse_repo,
        MockHospitalRepository::new(),
        MockVaccineRepository::new(),
        MockChildRepository::new(),
    )
    .statistics()
    .await
    .expect_err("repository offline");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
