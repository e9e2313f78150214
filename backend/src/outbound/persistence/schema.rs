//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation. Regenerate with `diesel print-schema` after
//! changing a migration.

diesel::table! {
    /// Parent (and administrator) accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Normalised email address, unique across the table.
        #[max_length = 128]
        email -> Varchar,
        /// PBKDF2 PHC-format password hash.
        #[max_length = 128]
        password -> Varchar,
        #[max_length = 128]
        first_name -> Varchar,
        #[max_length = 128]
        last_name -> Varchar,
        /// Verification state: `unverified` or `verified`.
        #[max_length = 32]
        status -> Varchar,
        /// Outstanding email verification token, if any.
        #[max_length = 128]
        token -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Nurse accounts, optionally assigned to a hospital.
    nurses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Normalised email address, unique across the table.
        #[max_length = 128]
        email -> Varchar,
        /// PBKDF2 PHC-format password hash.
        #[max_length = 128]
        password -> Varchar,
        #[max_length = 128]
        first_name -> Varchar,
        #[max_length = 128]
        last_name -> Varchar,
        /// Verification state: `unverified` or `verified`.
        #[max_length = 32]
        status -> Varchar,
        /// Outstanding email verification token, if any.
        #[max_length = 128]
        token -> Nullable<Varchar>,
        /// Assigned hospital, if any.
        hospital_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    /// Hospitals stocking vaccines and hosting nurses.
    hospitals (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        #[max_length = 128]
        name -> Varchar,
    }
}

diesel::table! {
    /// Vaccine catalogue with global stock counts.
    vaccines (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique catalogue name.
        #[max_length = 128]
        denomination -> Varchar,
        #[max_length = 1024]
        description -> Varchar,
        /// Stock aggregated across all hospitals.
        stock -> Int4,
    }
}

diesel::table! {
    /// Scheduled doses of each vaccine.
    doses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique dose name, e.g. `MMR 1st dose`.
        #[max_length = 128]
        denomination -> Varchar,
        /// Child's age in days at which the dose falls due.
        term -> Int4,
        vaccine_id -> Uuid,
    }
}

diesel::table! {
    /// Children registered by parents.
    children (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        #[max_length = 128]
        first_name -> Varchar,
        #[max_length = 128]
        last_name -> Varchar,
        birthdate -> Date,
        parent_id -> Uuid,
    }
}

diesel::table! {
    /// Per-hospital vaccine shelves.
    hospital_vaccines (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Units on the shelf; starts at zero when the link is created.
        quantity -> Int4,
        hospital_id -> Uuid,
        vaccine_id -> Uuid,
    }
}

diesel::table! {
    /// Administered doses per child.
    child_doses (child_id, dose_id) {
        child_id -> Uuid,
        dose_id -> Uuid,
    }
}

diesel::table! {
    /// Reminder-sent markers per child and dose; append-only.
    child_dose_notifications (child_id, dose_id) {
        child_id -> Uuid,
        dose_id -> Uuid,
    }
}

diesel::joinable!(nurses -> hospitals (hospital_id));
diesel::joinable!(doses -> vaccines (vaccine_id));
diesel::joinable!(children -> users (parent_id));
diesel::joinable!(hospital_vaccines -> hospitals (hospital_id));
diesel::joinable!(hospital_vaccines -> vaccines (vaccine_id));
diesel::joinable!(child_doses -> children (child_id));
diesel::joinable!(child_doses -> doses (dose_id));
diesel::joinable!(child_dose_notifications -> children (child_id));
diesel::joinable!(child_dose_notifications -> doses (dose_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    nurses,
    hospitals,
    vaccines,
    doses,
    children,
    hospital_vaccines,
    child_doses,
    child_dose_notifications,
);
