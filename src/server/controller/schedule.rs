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
        schedule::{CreateScheduleDto, InvitationResponseDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::schedule::{CreateScheduleParams, ScheduleWithTeams, UpdateScheduleParams},
        service::{photo::PhotoService, schedule::ScheduleService},
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Create a schedule hosted by one of the caller's teams.
///
/// # Access Control
/// - `Onboarded`
/// - `TeamManager` - OWNER or MANAGER of the host team
///
/// # Returns
/// - `201 Created` - Created schedule, CONFIRMED for SQUAD and PENDING for TEAM
/// - `400 Bad Request` - Invalid time window or invited team combination
/// - `404 Not Found` - Host or invited team not found
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Successfully created schedule", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[
            Permission::Onboarded,
            Permission::TeamManager(payload.host_team_id),
        ])
        .await?;

    let params = CreateScheduleParams::from_dto(user.id, payload);
    let schedule = ScheduleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedule", body = ScheduleDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = ScheduleService::new(&state.db).get_by_id(schedule_id).await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Schedules a team hosts or was invited to, ordered by start time.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/schedules",
    tag = SCHEDULE_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedules", body = Vec<ScheduleDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_schedules(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let schedules: Vec<ScheduleDto> = ScheduleService::new(&state.db)
        .get_by_team(team_id)
        .await?
        .into_iter()
        .map(ScheduleWithTeams::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(schedules)))
}

/// Update a schedule's place, description and times.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    put,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Successfully updated schedule", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);
    let schedule = service.get(schedule_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let params = UpdateScheduleParams::from_dto(schedule_id, payload);
    let schedule = service.update(params).await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Delete a schedule with its attendance, matches and photos.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    delete,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted schedule"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);
    let schedule = service.get(schedule_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let object_keys = service.delete(schedule_id).await?;
    PhotoService::new(&state.db, &state.storage)
        .remove_objects(&object_keys)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Accept or decline a TEAM invitation.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the invited team
///
/// # Returns
/// - `200 OK` - Schedule with its new status
/// - `400 Bad Request` - Not a TEAM schedule, or the invitation was already answered
#[utoipa::path(
    post,
    path = "/api/schedules/{schedule_id}/respond",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = InvitationResponseDto,
    responses(
        (status = 200, description = "Invitation answered", body = ScheduleDto),
        (status = 400, description = "Invitation not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the invited team", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<InvitationResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);
    let schedule = service.get(schedule_id).await?;

    let invited_team_id = schedule.invited_team_id.ok_or_else(|| {
        AppError::BadRequest("This schedule has no invited team".to_string())
    })?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(invited_team_id)])
        .await?;

    let schedule = service
        .respond_invitation(schedule_id, payload.accept)
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}
