//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. Conversion into domain entities happens in
//! the repository adapters, where stored text is re-validated.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    child_dose_notifications, child_doses, children, doses, hospital_vaccines, hospitals, nurses,
    users, vaccines,
};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub token: Option<String>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub status: &'a str,
    pub token: Option<&'a str>,
}

/// Changeset struct for updating existing user records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserUpdate<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub status: &'a str,
    pub token: Option<&'a str>,
}

/// Row struct for reading from the nurses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = nurses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NurseRow {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub token: Option<String>,
    pub hospital_id: Option<Uuid>,
}

/// Insertable struct for creating new nurse records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = nurses)]
pub(crate) struct NewNurseRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub status: &'a str,
    pub token: Option<&'a str>,
    pub hospital_id: Option<Uuid>,
}

/// Changeset struct for updating existing nurse records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = nurses)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct NurseUpdate<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub status: &'a str,
    pub token: Option<&'a str>,
    pub hospital_id: Option<Uuid>,
}

/// Row struct for reading from the hospitals table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hospitals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HospitalRow {
    pub id: Uuid,
    pub name: String,
}

/// Insertable struct for creating new hospital records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hospitals)]
pub(crate) struct NewHospitalRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
}

/// Row struct for reading from the vaccines table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vaccines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VaccineRow {
    pub id: Uuid,
    pub denomination: String,
    pub description: String,
    pub stock: i32,
}

/// Row struct for reading from the doses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DoseRow {
    pub id: Uuid,
    pub denomination: String,
    pub term: i32,
    pub vaccine_id: Uuid,
}

/// Row struct for reading from the children table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = children)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChildRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub parent_id: Uuid,
}

/// Insertable struct for creating new child records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = children)]
pub(crate) struct NewChildRow<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthdate: NaiveDate,
    pub parent_id: Uuid,
}

/// Changeset struct for updating existing child records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = children)]
pub(crate) struct ChildUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthdate: NaiveDate,
}

/// Row struct for reading from the hospital_vaccines table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hospital_vaccines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HospitalVaccineRow {
    pub id: Uuid,
    pub quantity: i32,
    pub hospital_id: Uuid,
    pub vaccine_id: Uuid,
}

/// Insertable struct for linking a vaccine to a hospital.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hospital_vaccines)]
pub(crate) struct NewHospitalVaccineRow {
    pub id: Uuid,
    pub quantity: i32,
    pub hospital_id: Uuid,
    pub vaccine_id: Uuid,
}

/// Insertable struct marking a dose as administered to a child.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = child_doses)]
pub(crate) struct NewChildDoseRow {
    pub child_id: Uuid,
    pub dose_id: Uuid,
}

/// Insertable struct marking a reminder as sent for a child and dose.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = child_dose_notifications)]
pub(crate) struct NewChildDoseNotificationRow {
    pub child_id: Uuid,
    pub dose_id: Uuid,
}
