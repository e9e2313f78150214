//! Wire schemas shared by several endpoint modules.
//!
//! Single-module payloads live next to their handlers; the types here are
//! the ones the frontend sees from more than one route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{ChildPayload, DosePayload};

/// Redirect-style response pointing the frontend at its next page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HrefBody {
    #[schema(example = "/verification")]
    pub href: String,
}

/// Existence-style response used by probe endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    #[schema(example = "Exist")]
    pub status: String,
}

impl StatusBody {
    pub fn exist() -> Self {
        Self {
            status: "Exist".to_owned(),
        }
    }

    pub fn not_exist() -> Self {
        Self {
            status: "Not Exist".to_owned(),
        }
    }
}

/// Child record payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChildBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(format = "date")]
    pub birthdate: String,
    #[schema(format = "uuid")]
    pub parent_id: String,
}

impl From<ChildPayload> for ChildBody {
    fn from(value: ChildPayload) -> Self {
        Self {
            id: value.id.to_string(),
            first_name: value.first_name,
            last_name: value.last_name,
            birthdate: value.birthdate.to_string(),
            parent_id: value.parent_id.to_string(),
        }
    }
}

/// Dose schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub denomination: String,
    /// Age in days at which the dose falls due.
    pub term: i32,
    #[schema(format = "uuid")]
    pub vaccine_id: String,
}

impl From<DosePayload> for DoseBody {
    fn from(value: DosePayload) -> Self {
        Self {
            id: value.id.to_string(),
            denomination: value.denomination,
            term: value.term,
            vaccine_id: value.vaccine_id.to_string(),
        }
    }
}
