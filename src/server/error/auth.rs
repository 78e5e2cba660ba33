use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session; the request is unauthenticated.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    ///
    /// The second field is a server-side reason, logged but never sent to the client.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The user has signed in but not finished onboarding.
    #[error("User {0} has not completed onboarding")]
    NotOnboarded(i32),

    /// CSRF state validation failed during the OAuth callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authorization code could not be exchanged for an access token.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Reasons are logged at debug level; client-facing messages stay generic.
///
/// # Returns
/// - 400 Bad Request - CSRF failures
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - Access denied or onboarding incomplete
/// - 404 Not Found - Session user missing from the database
/// - 500 Internal Server Error - Token exchange failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You need to be logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to do that",
            ),
            Self::NotOnboarded(_) => (StatusCode::FORBIDDEN, "Please complete onboarding first"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
