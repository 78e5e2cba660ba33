use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, OAuthFlowSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time admin bootstrap code printed to the server log.
    pub admin_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Start the OAuth login flow.
///
/// Stores a fresh CSRF state in the session and redirects to the provider. A valid
/// `admin_code` marks the login so the callback grants admin; an invalid one is ignored.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("admin_code" = Option<String>, Query, description = "One-time admin bootstrap code")
    ),
    responses(
        (status = 307, description = "Redirect to the OAuth provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(code) = params.admin_code {
        let valid = state.admin_code_service.validate_and_consume(&code).await;
        if valid {
            tracing::info!("Valid admin code presented, next login will be granted admin");
        } else {
            tracing::warn!("Invalid or expired admin code presented");
        }
        OAuthFlowSession::new(&session).set_admin_flag(valid).await?;
    }

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    );
    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the OAuth login flow.
///
/// Validates the CSRF state, signs the user in and redirects to onboarding for new
/// accounts or to the home page otherwise.
///
/// # Returns
/// - `307 Temporary Redirect` - Signed in
/// - `400 Bad Request` - CSRF state missing or mismatched
/// - `500 Internal Server Error` - Token exchange or provider request failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by the provider"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the web client"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    );
    let user = auth_service.callback(params.code, set_admin).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let target = if user.is_onboarded { "/" } else { "/onboarding" };

    Ok(Redirect::temporary(&format!(
        "{}{}",
        state.app_url.trim_end_matches('/'),
        target
    )))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the web client")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&format!("{}/", state.app_url.trim_end_matches('/')))
}

/// Get the signed-in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `404 Not Found` - Not logged in, or the session user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .current_user()
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
