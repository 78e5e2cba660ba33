//! API routing and OpenAPI documentation.
//!
//! Handlers are registered through `utoipa-axum` so the OpenAPI document is assembled from
//! the same route table that serves requests. Swagger UI is served at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{attendance, auth, feedback, game, photo, post, schedule, team, user},
    service::photo::MAX_PHOTO_SIZE,
    state::AppState,
};

/// Allowance for multipart boundaries and text fields on top of the photo itself.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Futsal Hub API",
        description = "Teams, schedules, matches and boards for futsal clubs"
    ),
    tags(
        (name = "auth", description = "OAuth login and session"),
        (name = "user", description = "Onboarding and player profiles"),
        (name = "team", description = "Teams and memberships"),
        (name = "schedule", description = "Squad sessions and team fixtures"),
        (name = "attendance", description = "Attendance and MVP votes"),
        (name = "game", description = "Matches, lineups, goals and statistics"),
        (name = "post", description = "Bulletin boards and comments"),
        (name = "photo", description = "Photo uploads"),
        (name = "feedback", description = "Feedback and bug reports")
    )
)]
struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // Users
        .routes(routes!(user::complete_onboarding))
        .routes(routes!(user::update_profile))
        .routes(routes!(user::get_profile))
        // Teams
        .routes(routes!(team::create_team, team::get_teams))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::get_members, team::request_join))
        .routes(routes!(team::approve_member))
        .routes(routes!(team::change_role))
        .routes(routes!(team::remove_member))
        // Schedules
        .routes(routes!(schedule::create_schedule))
        .routes(routes!(
            schedule::get_schedule,
            schedule::update_schedule,
            schedule::delete_schedule
        ))
        .routes(routes!(schedule::get_team_schedules))
        .routes(routes!(schedule::respond_invitation))
        // Attendance and MVP
        .routes(routes!(attendance::vote_attendance, attendance::get_attendance))
        .routes(routes!(attendance::vote_mvp, attendance::get_mvp_results))
        // Matches and statistics
        .routes(routes!(game::add_match, game::get_matches))
        .routes(routes!(game::update_lineup))
        .routes(routes!(game::delete_match))
        .routes(routes!(game::add_goal))
        .routes(routes!(game::delete_goal))
        .routes(routes!(game::get_schedule_stats))
        .routes(routes!(game::get_team_stats))
        // Boards
        .routes(routes!(post::get_posts, post::create_post))
        .routes(routes!(post::get_post, post::update_post, post::delete_post))
        .routes(routes!(post::set_post_hidden))
        .routes(routes!(post::get_comments, post::create_comment))
        .routes(routes!(post::update_comment, post::delete_comment))
        // Photos
        .routes(routes!(photo::upload_photo))
        .routes(routes!(photo::get_schedule_photos))
        .routes(routes!(photo::get_team_photos))
        .routes(routes!(photo::delete_photo))
        // Feedback
        .routes(routes!(feedback::submit_feedback))
        .routes(routes!(feedback::submit_bug_report, feedback::get_bug_reports))
        .routes(routes!(feedback::resolve_bug_report))
}

/// Builds the API router with Swagger UI mounted at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + MULTIPART_OVERHEAD))
}
