use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{OnboardingDto, UpdateProfileDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Complete onboarding for the signed-in user.
///
/// Sets nickname, position and region and marks the account onboarded. Calling it again
/// after onboarding updates the same fields.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Nickname invalid or already taken
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/user/onboarding",
    tag = USER_TAG,
    request_body = OnboardingDto,
    responses(
        (status = 200, description = "Onboarding completed", body = UserDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OnboardingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .complete_onboarding(
            user.id,
            payload.nickname,
            payload.position.into(),
            payload.region,
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the signed-in user's profile. Absent fields keep their value.
#[utoipa::path(
    patch,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            nickname: payload.nickname,
            position: payload.position.map(Into::into),
            region: payload.region,
            image: payload.image,
            mark_onboarded: false,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/profile",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Player profile with statistics", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
