//! Children registered by parents for vaccination tracking.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::PersonName;

/// A child belonging to a parent account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    id: Uuid,
    first_name: PersonName,
    last_name: PersonName,
    birthdate: NaiveDate,
    parent_id: Uuid,
}

impl Child {
    /// Assemble a child from validated components.
    pub fn new(
        id: Uuid,
        first_name: PersonName,
        last_name: PersonName,
        birthdate: NaiveDate,
        parent_id: Uuid,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birthdate,
            parent_id,
        }
    }

    /// Register a child with a random identifier.
    pub fn register(
        first_name: PersonName,
        last_name: PersonName,
        birthdate: NaiveDate,
        parent_id: Uuid,
    ) -> Self {
        Self::new(Uuid::new_v4(), first_name, last_name, birthdate, parent_id)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn parent_id(&self) -> Uuid {
        self.parent_id
    }

    /// Age in days on `today`, counting the birth day itself as day one.
    ///
    /// Dose terms and reminder windows are expressed against this count, so
    /// a dose with term 1 falls due on the day of birth.
    pub fn age_in_days(&self, today: NaiveDate) -> i64 {
        (today - self.birthdate).num_days() + 1
    }
}
