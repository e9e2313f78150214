//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Following the hexagonal pattern, each submodule provides concrete
//! implementations of domain port traits:
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **mail**: SMTP delivery via `lettre`
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod mail;
pub mod persistence;
