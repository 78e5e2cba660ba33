use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{AttendanceSummaryDto, MvpResultDto, VoteAttendanceDto, VoteMvpDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{attendance::AttendanceService, mvp::MvpService},
        state::AppState,
    },
};

/// Tag for grouping attendance and MVP endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Vote on attending a schedule.
///
/// The vote counts for the caller's host team membership first, then for the invited
/// team. Votes close at the schedule's vote deadline.
///
/// # Access Control
/// - `Onboarded` - Approved membership of a participating team is checked by the service
///
/// # Returns
/// - `200 OK` - Attendance summary including the new vote
/// - `400 Bad Request` - Schedule closed for votes or deadline passed
/// - `403 Forbidden` - Not a member of a participating team
#[utoipa::path(
    put,
    path = "/api/schedules/{schedule_id}/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = VoteAttendanceDto,
    responses(
        (status = 200, description = "Vote recorded", body = AttendanceSummaryDto),
        (status = 400, description = "Voting closed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of a participating team", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<VoteAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    let service = AttendanceService::new(&state.db);
    service
        .vote(schedule_id, user.id, payload.status.into(), Utc::now())
        .await?;
    let summary = service.get_attendance(schedule_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Attendance grouped by status", body = AttendanceSummaryDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = AttendanceService::new(&state.db)
        .get_attendance(schedule_id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Cast or move the caller's MVP vote.
///
/// # Access Control
/// - `Onboarded` - The caller must also have voted ATTEND, checked by the service
#[utoipa::path(
    put,
    path = "/api/schedules/{schedule_id}/mvp",
    tag = ATTENDANCE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = VoteMvpDto,
    responses(
        (status = 200, description = "Standings after the vote", body = MvpResultDto),
        (status = 400, description = "Vote not allowed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_mvp(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<VoteMvpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    let result = MvpService::new(&state.db)
        .vote(schedule_id, user.id, payload.target_user_id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}/mvp",
    tag = ATTENDANCE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "MVP standings", body = MvpResultDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mvp_results(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = MvpService::new(&state.db).get_results(schedule_id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
