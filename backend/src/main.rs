//! Backend entry-point: wires the REST endpoints, persistence, and mail.

mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use mockable::{DefaultEnv, Env};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{AppLinks, EmailAddress};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{
    BuildMode, fingerprint::key_fingerprint, session_settings_from_env,
};
use backend::outbound::mail::{SmtpConfig, SmtpMailer};
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{AppContext, ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn required<E: Env>(env: &E, name: &str) -> std::io::Result<String> {
    env.string(name)
        .ok_or_else(|| std::io::Error::other(format!("{name} must be set")))
}

fn email_from_env<E: Env>(env: &E, name: &str) -> std::io::Result<EmailAddress> {
    let value = required(env, name)?;
    EmailAddress::new(value).map_err(|err| std::io::Error::other(format!("invalid {name}: {err}")))
}

fn smtp_config_from_env<E: Env>(env: &E) -> std::io::Result<SmtpConfig> {
    let port = match env.string("SMTP_PORT") {
        Some(value) => value
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid SMTP_PORT='{value}': {err}")))?,
        None => DEFAULT_SMTP_PORT,
    };
    Ok(SmtpConfig {
        host: env
            .string("SMTP_HOST")
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
        port,
        username: required(env, "MAIL_USERNAME")?,
        password: required(env, "MAIL_PASSWORD")?,
    })
}

fn app_context_from_env<E: Env>(env: &E) -> std::io::Result<AppContext> {
    let base_url = env
        .string("APP_BASE_URL")
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    Ok(AppContext {
        links: AppLinks::new(base_url),
        admin_email: email_from_env(env, "ADMIN_EMAIL")?,
        admin_mailbox: email_from_env(env, "ADMIN_USERNAME")?,
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();

    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(key = %key_fingerprint(&session.key), "session key loaded");

    let database_url = required(&env, "DATABASE_URL")?;
    run_pending_migrations(&database_url)
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let db_pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let mailer = SmtpMailer::new(smtp_config_from_env(&env)?)
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let context = app_context_from_env(&env)?;

    let bind_addr: SocketAddr = env
        .string("BIND_ADDR")
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
        .parse()
        .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, bind_addr, db_pool, Arc::new(mailer), context);

    info!(%bind_addr, "starting http server");
    create_server(health_state, config)?.await
}
