//! Account HTTP handlers: sign-up, login, logout, and email verification.
//!
//! ```text
//! POST /api/v1/sign-up
//! POST /api/v1/login
//! POST /api/v1/logout
//! GET  /api/v1/verify/{email}/{token}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{SignUpRequest, VerifyEmailRequest};
use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::HrefBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a parent account.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequestBody {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Request payload for logging in.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

/// Register a parent account and mail a verification link.
#[utoipa::path(
    post,
    path = "/api/v1/sign-up",
    request_body = SignUpRequestBody,
    responses(
        (status = 200, description = "Account created, verification mailed", body = HrefBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signUp",
    security([])
)]
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpRequestBody>,
) -> ApiResult<web::Json<HrefBody>> {
    let body = payload.into_inner();

    let response = state
        .accounts
        .sign_up(SignUpRequest {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            password: body.password,
        })
        .await?;

    Ok(web::Json(HrefBody {
        href: response.href,
    }))
}

/// Authenticate credentials and establish a session.
///
/// Verified accounts get a session cookie and their role's home path in
/// `href`. Unverified accounts get a fresh verification email and the
/// verification page instead, with no session.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::accounts::login;
///
/// let app = App::new().service(login);
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequestBody,
    responses(
        (status = 200, description = "Login processed", body = HrefBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequestBody>,
) -> ApiResult<web::Json<HrefBody>> {
    let body = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&body.email, &body.password)
        .map_err(map_login_validation_error)?;

    let response = state.accounts.login(&credentials).await?;
    if let Some(account) = response.account {
        session.persist_account(&account)?;
    }

    Ok(web::Json(HrefBody {
        href: response.href,
    }))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::InvalidEmail(_) => {
            Error::invalid_request("email must be a valid address")
                .with_details(json!({ "field": "email", "code": "invalid_email" }))
        }
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Session ended", body = HrefBody),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "logout",
    security(("SessionCookie" = []))
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<web::Json<HrefBody>> {
    session.require_account()?;
    session.clear();
    Ok(web::Json(HrefBody {
        href: "/login".to_owned(),
    }))
}

/// Confirm an email address from a mailed verification link.
///
/// Marks the matching account verified, then mails a fresh verification
/// link to the address either way.
#[utoipa::path(
    get,
    path = "/api/v1/verify/{email}/{token}",
    params(
        ("email" = String, Path, description = "Address the link was mailed to"),
        ("token" = String, Path, description = "Verification token from the email")
    ),
    responses(
        (status = 200, description = "Verification processed", body = HrefBody),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "verifyEmail",
    security([])
)]
#[get("/verify/{email}/{token}")]
pub async fn verify_email(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<HrefBody>> {
    let (email, token) = path.into_inner();

    let response = state
        .accounts
        .verify_email(VerifyEmailRequest { email, token })
        .await?;

    Ok(web::Json(HrefBody {
        href: response.href,
    }))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
