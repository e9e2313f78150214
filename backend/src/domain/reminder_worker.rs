//! Background worker that mails parents ahead of scheduled doses.
//!
//! Each scan reads the dose schedule and the child roster, classifies every
//! (child, dose) pair against the reminder windows, and mails the parent for
//! pairs not yet in the notified set. A pair is recorded as notified only
//! after its reminder is delivered, so a failed delivery is retried on the
//! next scan.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::email::reminder_email;
use crate::domain::ports::{Mailer, ReminderRepository};
use crate::domain::service_support::map_reminder_repository_error;
use crate::domain::{Error, ReminderWindow, TraceId};

/// Worker configuration controlling scan cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWorkerConfig {
    /// Pause between scans.
    pub scan_interval: Duration,
}

impl Default for ReminderWorkerConfig {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(60),
        }
    }
}

/// Async sleeping abstraction between scans.
#[async_trait]
pub trait ReminderSleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl ReminderSleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Summary of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReminderScanOutcome {
    /// Reminders delivered and recorded.
    pub sent: usize,
    /// Deliveries that failed and stay eligible for the next scan.
    pub failed: usize,
}

/// Domain-owned reminder worker.
pub struct ReminderWorker {
    repo: Arc<dyn ReminderRepository>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn ReminderSleeper>,
    config: ReminderWorkerConfig,
}

impl ReminderWorker {
    /// Build a worker sleeping on the Tokio timer.
    pub fn new(
        repo: Arc<dyn ReminderRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        config: ReminderWorkerConfig,
    ) -> Self {
        Self::with_sleeper(repo, mailer, clock, Arc::new(TokioSleeper), config)
    }

    /// Build a worker with an injected sleeper.
    pub fn with_sleeper(
        repo: Arc<dyn ReminderRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        sleeper: Arc<dyn ReminderSleeper>,
        config: ReminderWorkerConfig,
    ) -> Self {
        Self {
            repo,
            mailer,
            clock,
            sleeper,
            config,
        }
    }

    /// Scan forever, pausing [`ReminderWorkerConfig::scan_interval`] between
    /// rounds. Each scan runs under a fresh trace id.
    pub async fn run(&self) {
        loop {
            let trace_id = TraceId::generate();
            match TraceId::scope(trace_id, self.scan()).await {
                Ok(outcome) => info!(
                    trace_id = %trace_id,
                    sent = outcome.sent,
                    failed = outcome.failed,
                    "reminder scan complete"
                ),
                Err(error) => warn!(
                    trace_id = %trace_id,
                    error = %error,
                    "reminder scan failed"
                ),
            }
            self.sleeper.sleep(self.config.scan_interval).await;
        }
    }

    /// Run one scan over the full roster.
    pub async fn scan(&self) -> Result<ReminderScanOutcome, Error> {
        let doses = self
            .repo
            .list_doses()
            .await
            .map_err(map_reminder_repository_error)?;
        let children = self
            .repo
            .list_children()
            .await
            .map_err(map_reminder_repository_error)?;
        let today = self.clock.utc().date_naive();

        let mut outcome = ReminderScanOutcome::default();
        for child in &children {
            let parent = self
                .repo
                .find_parent(child.parent_id())
                .await
                .map_err(map_reminder_repository_error)?;
            let Some(parent) = parent else {
                warn!(child_id = %child.id(), "child has no parent account; skipping reminders");
                continue;
            };
            let notified = self
                .repo
                .notified_dose_ids(child.id())
                .await
                .map_err(map_reminder_repository_error)?;
            let age_in_days = child.age_in_days(today);

            for dose in &doses {
                if notified.contains(&dose.id()) {
                    continue;
                }
                let Some(window) = ReminderWindow::classify(dose.term(), age_in_days) else {
                    continue;
                };

                let message = reminder_email(
                    parent.email().clone(),
                    parent.first_name().as_ref(),
                    child.first_name().as_ref(),
                    dose.denomination(),
                    window,
                );
                if let Err(error) = self.mailer.send(&message).await {
                    warn!(
                        child_id = %child.id(),
                        dose_id = %dose.id(),
                        error = %error,
                        "reminder delivery failed; retrying next scan"
                    );
                    outcome.failed += 1;
                    continue;
                }
                self.repo
                    .record_notified(child.id(), dose.id())
                    .await
                    .map_err(map_reminder_repository_error)?;
                outcome.sent += 1;
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "reminder_worker_tests.rs"]
mod tests;
