//! Reminder window classification for upcoming doses.

use std::fmt;

/// How soon a dose falls due, relative to a child's age today.
///
/// Reminders go out at most two days ahead of the scheduled term, once per
/// window, so a parent hears about each dose up to three times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderWindow {
    InTwoDays,
    Tomorrow,
    Today,
}

impl ReminderWindow {
    /// Classify a dose term against the child's age in days.
    ///
    /// Returns `None` when the dose is not due within the next two days,
    /// including doses whose term has already passed.
    pub fn classify(term: i32, age_in_days: i64) -> Option<Self> {
        let term = i64::from(term);
        if term == age_in_days + 2 {
            Some(Self::InTwoDays)
        } else if term == age_in_days + 1 {
            Some(Self::Tomorrow)
        } else if term == age_in_days {
            Some(Self::Today)
        } else {
            None
        }
    }

    /// Phrase slotted into the reminder email body.
    pub fn label(self) -> &'static str {
        match self {
            Self::InTwoDays => "in 2 days",
            Self::Tomorrow => "for tomorrow",
            Self::Today => "for today",
        }
    }
}

impl fmt::Display for ReminderWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(32, 30, Some(ReminderWindow::InTwoDays))]
    #[case(31, 30, Some(ReminderWindow::Tomorrow))]
    #[case(30, 30, Some(ReminderWindow::Today))]
    #[case(33, 30, None)]
    #[case(29, 30, None)]
    fn classification_matches_two_day_lead(
        #[case] term: i32,
        #[case] age_in_days: i64,
        #[case] expected: Option<ReminderWindow>,
    ) {
        assert_eq!(ReminderWindow::classify(term, age_in_days), expected);
    }

    #[rstest]
    #[case(ReminderWindow::InTwoDays, "in 2 days")]
    #[case(ReminderWindow::Tomorrow, "for tomorrow")]
    #[case(ReminderWindow::Today, "for today")]
    fn labels_read_as_schedule_phrases(#[case] window: ReminderWindow, #[case] expected: &str) {
        assert_eq!(window.label(), expected);
    }
}
