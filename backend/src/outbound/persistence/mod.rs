//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! The adapters are thin translators: Diesel row structs (`models.rs`) and
//! table definitions (`schema.rs`) stay internal, every database error is
//! mapped to the owning port's error type, and no business logic lives here.

mod diesel_child_repository;
mod diesel_hospital_repository;
mod diesel_nurse_repository;
mod diesel_reminder_repository;
mod diesel_user_repository;
mod diesel_vaccine_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_child_repository::DieselChildRepository;
pub use diesel_hospital_repository::DieselHospitalRepository;
pub use diesel_nurse_repository::DieselNurseRepository;
pub use diesel_reminder_repository::DieselReminderRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_vaccine_repository::DieselVaccineRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
