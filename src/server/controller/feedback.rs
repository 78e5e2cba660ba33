use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        feedback::{BugReportDto, CreateBugReportDto, CreateFeedbackDto, PaginatedBugReportsDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::feedback::CreateBugReportParams,
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Submit free-form feedback. Anonymous submissions are accepted.
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored"),
        (status = 400, description = "Empty or oversized feedback", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    FeedbackService::new(&state.db)
        .submit_feedback(user.map(|u| u.id), payload.content)
        .await?;

    Ok(StatusCode::CREATED)
}

/// File a bug report.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    post,
    path = "/api/bug-reports",
    tag = FEEDBACK_TAG,
    request_body = CreateBugReportDto,
    responses(
        (status = 201, description = "Bug report stored", body = BugReportDto),
        (status = 400, description = "Missing title or description", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_bug_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBugReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = FeedbackService::new(&state.db)
        .submit_bug_report(CreateBugReportParams {
            user_id: user.id,
            title: payload.title,
            description: payload.description,
            page_url: payload.page_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// List bug reports, unresolved first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/bug-reports",
    tag = FEEDBACK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bug reports", body = PaginatedBugReportsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bug_reports(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reports = FeedbackService::new(&state.db)
        .list_bug_reports(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(reports.into_dto())))
}

/// Mark a bug report resolved.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/bug-reports/{report_id}/resolve",
    tag = FEEDBACK_TAG,
    params(
        ("report_id" = i32, Path, description = "Bug report ID")
    ),
    responses(
        (status = 204, description = "Bug report resolved"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Bug report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_bug_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FeedbackService::new(&state.db)
        .resolve_bug_report(report_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
