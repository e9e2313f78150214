//! Background process mailing parents ahead of scheduled doses.
//!
//! Runs the reminder scan loop against the same database and SMTP relay as
//! the HTTP server. Connection settings come from the environment; the scan
//! cadence can be overridden on the command line or with
//! `REMINDER_INTERVAL_SECS`.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::{DefaultClock, DefaultEnv, Env};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{ReminderWorker, ReminderWorkerConfig};
use backend::outbound::mail::{SmtpConfig, SmtpMailer};
use backend::outbound::persistence::{DbPool, DieselReminderRepository, PoolConfig};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Parser, Debug)]
#[command(name = "reminder-worker", about = "Send upcoming-dose reminder emails")]
struct Args {
    /// Seconds to pause between scans; overrides REMINDER_INTERVAL_SECS.
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Run a single scan and exit instead of looping.
    #[arg(long)]
    once: bool,
}

fn scan_interval(args: &Args, env: &impl Env) -> Result<Duration> {
    let secs = match (args.interval_secs, env.string("REMINDER_INTERVAL_SECS")) {
        (Some(secs), _) => secs,
        (None, Some(value)) => value
            .parse()
            .wrap_err_with(|| format!("invalid REMINDER_INTERVAL_SECS='{value}'"))?,
        (None, None) => 60,
    };
    Ok(Duration::from_secs(secs))
}

fn smtp_config(env: &impl Env) -> Result<SmtpConfig> {
    let port = match env.string("SMTP_PORT") {
        Some(value) => value
            .parse()
            .wrap_err_with(|| format!("invalid SMTP_PORT='{value}'"))?,
        None => DEFAULT_SMTP_PORT,
    };
    Ok(SmtpConfig {
        host: env
            .string("SMTP_HOST")
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
        port,
        username: env
            .string("MAIL_USERNAME")
            .ok_or_else(|| eyre!("MAIL_USERNAME must be set"))?,
        password: env
            .string("MAIL_PASSWORD")
            .ok_or_else(|| eyre!("MAIL_PASSWORD must be set"))?,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let env = DefaultEnv::new();

    let database_url = env
        .string("DATABASE_URL")
        .ok_or_else(|| eyre!("DATABASE_URL must be set"))?;
    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .wrap_err("failed to build database pool")?;
    let mailer = SmtpMailer::new(smtp_config(&env)?).wrap_err("failed to build SMTP transport")?;

    let config = ReminderWorkerConfig {
        scan_interval: scan_interval(&args, &env)?,
    };
    let worker = ReminderWorker::new(
        Arc::new(DieselReminderRepository::new(pool)),
        Arc::new(mailer),
        Arc::new(DefaultClock),
        config,
    );

    if args.once {
        let outcome = worker.scan().await.wrap_err("reminder scan failed")?;
        info!(
            sent = outcome.sent,
            failed = outcome.failed,
            "reminder scan complete"
        );
        return Ok(());
    }

    info!(interval_secs = config.scan_interval.as_secs(), "starting reminder loop");
    worker.run().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;

    fn env_returning(value: Option<&str>) -> MockEnv {
        let owned = value.map(str::to_owned);
        let mut env = MockEnv::new();
        env.expect_string().returning(move |_| owned.clone());
        env
    }

    #[test]
    fn flag_overrides_environment_interval() {
        let args = Args {
            interval_secs: Some(5),
            once: false,
        };
        let interval =
            scan_interval(&args, &env_returning(Some("120"))).expect("interval should parse");
        assert_eq!(interval, Duration::from_secs(5));
    }

    #[test]
    fn interval_defaults_to_a_minute() {
        let args = Args {
            interval_secs: None,
            once: false,
        };
        let interval = scan_interval(&args, &env_returning(None)).expect("default interval");
        assert_eq!(interval, Duration::from_secs(60));
    }

    #[test]
    fn unparseable_environment_interval_is_rejected() {
        let args = Args {
            interval_secs: None,
            once: false,
        };
        let err = scan_interval(&args, &env_returning(Some("soon")))
            .expect_err("non-numeric interval must fail");
        assert!(err.to_string().contains("REMINDER_INTERVAL_SECS"));
    }
}
