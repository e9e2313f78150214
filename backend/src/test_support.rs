//! Shared test doubles for clock-driven code.

pub mod scheduling {
    //! Deterministic clock substitutes.

    use chrono::{DateTime, Local, Utc};
    use mockable::Clock;

    /// Clock pinned to a single instant.
    pub struct FixedClock(DateTime<Utc>);

    impl FixedClock {
        pub fn at(now: DateTime<Utc>) -> Self {
            Self(now)
        }
    }

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }
}
