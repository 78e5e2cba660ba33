use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        photo::{PhotoDto, UploadPhotoForm},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::photo::{Photo, PhotoUpload},
        service::photo::PhotoService,
        state::AppState,
    },
};

/// Tag for grouping photo endpoints in OpenAPI documentation
pub static PHOTO_TAG: &str = "photo";

/// Upload a photo for a schedule or team.
///
/// Expects a multipart form with a `file` part (JPEG, PNG, WEBP or GIF, up to 10 MiB) and
/// optional `schedule_id` and `team_id` text parts.
///
/// # Access Control
/// - `Onboarded`
#[utoipa::path(
    post,
    path = "/api/photos",
    tag = PHOTO_TAG,
    request_body(content = UploadPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photo uploaded", body = PhotoDto),
        (status = 400, description = "Missing, empty, oversized or unsupported file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Onboarding not completed", body = ErrorDto),
        (status = 404, description = "Schedule or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut schedule_id = None;
    let mut team_id = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                file = Some((content_type, bytes.to_vec()));
            }
            Some("schedule_id") => schedule_id = Some(parse_id(&field.text().await?)?),
            Some("team_id") => team_id = Some(parse_id(&field.text().await?)?),
            _ => {}
        }
    }

    let (content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("A file is required".to_string()))?;

    let photo = PhotoService::new(&state.db, &state.storage)
        .upload(PhotoUpload {
            uploader_id: user.id,
            schedule_id,
            team_id,
            content_type,
            bytes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(photo.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}/photos",
    tag = PHOTO_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Photos of the schedule, newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_photos(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let photos: Vec<PhotoDto> = PhotoService::new(&state.db, &state.storage)
        .get_by_schedule(schedule_id)
        .await?
        .into_iter()
        .map(Photo::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(photos)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/photos",
    tag = PHOTO_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Photos of the team, newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_photos(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let photos: Vec<PhotoDto> = PhotoService::new(&state.db, &state.storage)
        .get_by_team(team_id)
        .await?
        .into_iter()
        .map(Photo::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(photos)))
}

/// Delete a photo and its stored object.
///
/// # Access Control
/// - Uploader of the photo or admin
#[utoipa::path(
    delete,
    path = "/api/photos/{photo_id}",
    tag = PHOTO_TAG,
    params(
        ("photo_id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    session: Session,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PhotoService::new(&state.db, &state.storage)
        .delete(&user, photo_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid ID: {}", value)))
}
