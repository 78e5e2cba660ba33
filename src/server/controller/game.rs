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
        game::{
            AddMatchResultDto, CreateGoalDto, CreateMatchDto, MatchDto, PlayerStatLineDto,
            UpdateLineupDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game::{CreateGoalParams, CreateMatchParams, GameMatch, LineupEntry, PlayerStatLine},
        service::{game::GameService, schedule::ScheduleService},
        state::AppState,
    },
};

/// Tag for grouping match and statistics endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Record a match for a schedule.
///
/// Lineup players must have voted ATTEND. A CONFIRMED schedule moves to READY, and a TEAM
/// fixture moves to PLAY once both teams have attendees.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    post,
    path = "/api/schedules/{schedule_id}/matches",
    tag = GAME_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match recorded", body = AddMatchResultDto),
        (status = 400, description = "Invalid match or lineup", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_match(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = ScheduleService::new(&state.db).get(schedule_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let params = CreateMatchParams {
        schedule_id,
        home_team_id: payload.home_team_id,
        away_team_id: payload.away_team_id,
        lineups: payload
            .lineups
            .into_iter()
            .map(LineupEntry::from_dto)
            .collect(),
    };
    let result = GameService::new(&state.db).add_match(params).await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}/matches",
    tag = GAME_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Matches in play order", body = Vec<MatchDto>),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches: Vec<MatchDto> = GameService::new(&state.db)
        .get_matches(schedule_id)
        .await?
        .into_iter()
        .map(GameMatch::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(matches)))
}

/// Replace the lineup of a match.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    put,
    path = "/api/matches/{match_id}/lineup",
    tag = GAME_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    request_body = UpdateLineupDto,
    responses(
        (status = 200, description = "Lineup replaced", body = MatchDto),
        (status = 400, description = "Invalid lineup", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lineup(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    Json(payload): Json<UpdateLineupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);
    let schedule = service.get_match_schedule(match_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let lineups = payload
        .lineups
        .into_iter()
        .map(LineupEntry::from_dto)
        .collect();
    let game_match = service.update_lineup(match_id, lineups).await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

/// Delete a match with its lineup and goals.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}",
    tag = GAME_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);
    let schedule = service.get_match_schedule(match_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    service.delete_match(match_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a goal and update the score.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/goals",
    tag = GAME_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    request_body = CreateGoalDto,
    responses(
        (status = 201, description = "Goal recorded", body = MatchDto),
        (status = 400, description = "Invalid goal", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_goal(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    Json(payload): Json<CreateGoalDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);
    let schedule = service.get_match_schedule(match_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let params = CreateGoalParams {
        match_id,
        scorer_id: payload.scorer_id,
        assist_id: payload.assist_id,
        side: payload.side.into(),
        is_own_goal: payload.is_own_goal,
    };
    let game_match = service.add_goal(params).await?;

    Ok((StatusCode::CREATED, Json(game_match.into_dto())))
}

/// Delete a goal and revert the score.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the host team
#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}",
    tag = GAME_TAG,
    params(
        ("goal_id" = i32, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal deleted", body = MatchDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the host team", body = ErrorDto),
        (status = 404, description = "Goal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_goal(
    State(state): State<AppState>,
    session: Session,
    Path(goal_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);
    let schedule = service.get_goal_schedule(goal_id).await?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(schedule.host_team_id)])
        .await?;

    let game_match = service.delete_goal(goal_id).await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{schedule_id}/stats",
    tag = GAME_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Goals and assists per player", body = Vec<PlayerStatLineDto>),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_stats(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stats: Vec<PlayerStatLineDto> = GameService::new(&state.db)
        .schedule_stats(schedule_id)
        .await?
        .into_iter()
        .map(PlayerStatLine::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(stats)))
}

/// Goals and assists of a team's members over every schedule the team took part in.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/stats",
    tag = GAME_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Goals and assists per member", body = Vec<PlayerStatLineDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stats: Vec<PlayerStatLineDto> = GameService::new(&state.db)
        .team_stats(team_id)
        .await?
        .into_iter()
        .map(PlayerStatLine::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(stats)))
}
