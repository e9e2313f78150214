//! Tests for the reminder worker.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MailerError, MockMailer, MockReminderRepository, ReminderRepositoryError,
};
use crate::domain::{AccountStatus, Child, Dose, EmailAddress, ErrorCode, PersonName, User};
use crate::test_support::scheduling::FixedClock;

fn person(raw: &str) -> PersonName {
    PersonName::new(raw).expect("valid name")
}

fn parent() -> User {
    User::new(
        Uuid::new_v4(),
        EmailAddress::new("parent@example.com").expect("valid email"),
        "stored-hash".to_owned(),
        person("Grace"),
        person("Hopper"),
        AccountStatus::Verified,
        None,
    )
}

/// Born 2025-06-01, so 288 days old on the fixed scan date below.
fn child_of(parent_id: Uuid) -> Child {
    Child::register(
        person("Ada"),
        person("Hopper"),
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        parent_id,
    )
}

fn dose_with(denomination: &str, term: i32) -> Dose {
    Dose::create(denomination.to_owned(), term, Uuid::new_v4()).expect("valid dose")
}

fn worker(repo: MockReminderRepository, mailer: MockMailer) -> ReminderWorker {
    let clock = FixedClock::at(
        Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0)
            .single()
            .expect("valid instant"),
    );
    ReminderWorker::new(
        Arc::new(repo),
        Arc::new(mailer),
        Arc::new(clock),
        ReminderWorkerConfig::default(),
    )
}

#[tokio::test]
async fn scan_mails_each_due_pair_once_and_records_it() {
    let parent = parent();
    let parent_id = parent.id();
    let child = child_of(parent_id);
    let child_id = child.id();
    let due = dose_with("MMR 1st dose", 290);
    let due_id = due.id();
    let distant = dose_with("MMR 2nd dose", 365);

    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(1)
        .return_once(move || Ok(vec![due, distant]));
    repo.expect_list_children()
        .times(1)
        .return_once(move || Ok(vec![child]));
    repo.expect_find_parent()
        .withf(move |id: &Uuid| *id == parent_id)
        .times(1)
        .return_once(move |_| Ok(Some(parent)));
    repo.expect_notified_dose_ids()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    repo.expect_record_notified()
        .withf(move |child: &Uuid, dose: &Uuid| *child == child_id && *dose == due_id)
        .times(1)
        .return_once(|_, _| Ok(()));
    let mut mailer = MockMailer::new();
    mailer
        .expect_send()
        .withf(|message| {
            message.to().as_ref() == "parent@example.com"
                && message.subject() == "Vaccination reminder"
                && message.html_body().contains("Hi Grace!")
                && message.html_body().contains("MMR 1st dose")
                && message.html_body().contains("in 2 days")
        })
        .times(1)
        .return_once(|_| Ok(()));

    let outcome = worker(repo, mailer).scan().await.expect("scan succeeds");

    assert_eq!(
        outcome,
        ReminderScanOutcome {
            sent: 1,
            failed: 0,
        }
    );
}

#[tokio::test]
async fn scan_skips_pairs_already_notified() {
    let parent = parent();
    let parent_id = parent.id();
    let child = child_of(parent_id);
    let due = dose_with("MMR 1st dose", 290);
    let due_id = due.id();

    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(1)
        .return_once(move || Ok(vec![due]));
    repo.expect_list_children()
        .times(1)
        .return_once(move || Ok(vec![child]));
    repo.expect_find_parent()
        .times(1)
        .return_once(move |_| Ok(Some(parent)));
    repo.expect_notified_dose_ids()
        .times(1)
        .return_once(move |_| Ok(vec![due_id]));
    repo.expect_record_notified().times(0);
    let mut mailer = MockMailer::new();
    mailer.expect_send().times(0);

    let outcome = worker(repo, mailer).scan().await.expect("scan succeeds");

    assert_eq!(outcome.sent, 0);
}

#[tokio::test]
async fn scan_skips_children_without_a_parent_account() {
    let child = child_of(Uuid::new_v4());

    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(1)
        .return_once(|| Ok(vec![dose_with("MMR 1st dose", 290)]));
    repo.expect_list_children()
        .times(1)
        .return_once(move || Ok(vec![child]));
    repo.expect_find_parent().times(1).return_once(|_| Ok(None));
    repo.expect_notified_dose_ids().times(0);
    let mut mailer = MockMailer::new();
    mailer.expect_send().times(0);

    let outcome = worker(repo, mailer).scan().await.expect("scan succeeds");

    assert_eq!(outcome.sent, 0);
}

#[tokio::test]
async fn scan_leaves_failed_deliveries_unrecorded() {
    let parent = parent();
    let child = child_of(parent.id());

    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(1)
        .return_once(|| Ok(vec![dose_with("MMR 1st dose", 290)]));
    repo.expect_list_children()
        .times(1)
        .return_once(move || Ok(vec![child]));
    repo.expect_find_parent()
        .times(1)
        .return_once(move |_| Ok(Some(parent)));
    repo.expect_notified_dose_ids()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    repo.expect_record_notified().times(0);
    let mut mailer = MockMailer::new();
    mailer
        .expect_send()
        .times(1)
        .return_once(|_| Err(MailerError::delivery("mailbox unavailable")));

    let outcome = worker(repo, mailer).scan().await.expect("scan succeeds");

    assert_eq!(
        outcome,
        ReminderScanOutcome {
            sent: 0,
            failed: 1,
        }
    );
}

#[tokio::test]
async fn repository_failures_abort_the_scan() {
    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(1)
        .return_once(|| Err(ReminderRepositoryError::connection("pool exhausted")));

    let error = worker(repo, MockMailer::new())
        .scan()
        .await
        .expect_err("repository offline");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn run_continues_scanning_after_failures() {
    let mut repo = MockReminderRepository::new();
    repo.expect_list_doses()
        .times(2..)
        .returning(|| Err(ReminderRepositoryError::connection("pool exhausted")));
    let clock = FixedClock::at(
        Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0)
            .single()
            .expect("valid instant"),
    );
    let worker = ReminderWorker::new(
        Arc::new(repo),
        Arc::new(MockMailer::new()),
        Arc::new(clock),
        ReminderWorkerConfig {
            scan_interval: Duration::from_millis(1),
        },
    );

    let still_running = tokio::time::timeout(Duration::from_millis(50), worker.run())
        .await
        .is_err();
    assert!(still_running);
}
