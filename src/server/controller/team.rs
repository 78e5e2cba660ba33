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
        team::{
            ChangeRoleDto, CreateTeamDto, PaginatedTeamsDto, TeamDto, TeamMemberDto,
            UpdateTeamDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{CreateTeamParams, TeamMemberWithUser, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team.
///
/// The caller becomes the team's OWNER.
///
/// # Access Control
/// - `Onboarded` - Only onboarded users can create teams
///
/// # Returns
/// - `201 Created` - Created team
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Onboarding not completed
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Onboarding not completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    let params = CreateTeamParams::from_dto(user.id, payload);
    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = PaginatedTeamsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(teams.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(team_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update a team's details.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the team
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let params = UpdateTeamParams::from_dto(team_id, payload);
    let team = TeamService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team.
///
/// Teams referenced by schedules are only flagged deleted.
///
/// # Access Control
/// - `TeamOwner` - OWNER of the team
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    TeamService::new(&state.db).delete(team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/members",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Memberships including pending requests", body = Vec<TeamMemberDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let members: Vec<TeamMemberDto> = TeamService::new(&state.db)
        .get_members(team_id)
        .await?
        .into_iter()
        .map(TeamMemberWithUser::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Request to join a team.
///
/// # Access Control
/// - `Onboarded`
///
/// # Returns
/// - `201 Created` - Request stored as a pending membership
/// - `400 Bad Request` - Already a member or a request is pending
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/members",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 201, description = "Join request created"),
        (status = 400, description = "Membership already exists", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Onboarding not completed", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_join(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    TeamService::new(&state.db)
        .request_join(team_id, user.id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Approve a pending join request.
///
/// # Access Control
/// - `TeamManager` - OWNER or MANAGER of the team
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/members/{user_id}/approve",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "Requesting user ID")
    ),
    responses(
        (status = 204, description = "Member approved"),
        (status = 400, description = "Member already approved", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of the team", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    TeamService::new(&state.db)
        .approve_member(team_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a member's role between MANAGER and MEMBER.
///
/// # Access Control
/// - `TeamOwner` - OWNER of the team
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/members/{user_id}/role",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "Member user ID")
    ),
    request_body = ChangeRoleDto,
    responses(
        (status = 204, description = "Role changed"),
        (status = 400, description = "Role change not allowed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner of the team", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_role(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<ChangeRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    TeamService::new(&state.db)
        .change_role(team_id, user_id, payload.role.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a member, reject a join request, or leave the team.
///
/// # Access Control
/// - Logged in. Removing someone else additionally requires OWNER or MANAGER, checked
///   by the service.
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/members/{user_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "Member user ID")
    ),
    responses(
        (status = 204, description = "Membership removed"),
        (status = 400, description = "The owner cannot be removed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TeamService::new(&state.db)
        .remove_member(team_id, &actor, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
