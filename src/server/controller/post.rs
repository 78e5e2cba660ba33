use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        post::{
            CommentDto, CreateCommentDto, CreatePostDto, PaginatedPostsDto, PostDto,
            SetHiddenDto, UpdateCommentDto, UpdatePostDto,
        },
    },
    server::{
        controller::{clamp_entries, default_entries},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::post::{Comment, CreateCommentParams, CreatePostParams, UpdatePostParams},
        service::{comment::CommentService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

#[derive(Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub team_id: Option<i32>,
}

/// List visible posts, newest first.
///
/// Without `team_id` every visible post is listed; with it only that team's board.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("team_id" = Option<i32>, Query, description = "Only posts of this team's board")
    ),
    responses(
        (status = 200, description = "Successfully retrieved posts", body = PaginatedPostsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db)
        .get_paginated(params.page, clamp_entries(params.entries), params.team_id)
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Create a post.
///
/// # Access Control
/// - `Onboarded`
/// - `TeamMember` - Approved member of the team when posting to a team board
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to post on this board", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut permissions = vec![Permission::Onboarded];
    if let Some(team_id) = payload.team_id {
        permissions.push(Permission::TeamMember(team_id));
    }

    let user = AuthGuard::new(&state.db, &session)
        .require(&permissions)
        .await?;

    let post = PostService::new(&state.db)
        .create(CreatePostParams {
            author_id: user.id,
            team_id: payload.team_id,
            title: payload.title,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a post and count the view.
///
/// Hidden posts are only visible to their author and admins.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let post = PostService::new(&state.db)
        .get_by_id(post_id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Edit a post.
///
/// # Access Control
/// - Author of the post
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .update(
            &user,
            UpdatePostParams {
                id: post_id,
                title: payload.title,
                content: payload.content,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post.
///
/// Posts with comments are only flagged deleted.
///
/// # Access Control
/// - Author of the post or admin
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PostService::new(&state.db).delete(&user, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Hide or unhide a post.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}/hidden",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = SetHiddenDto,
    responses(
        (status = 204, description = "Visibility changed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_post_hidden(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<SetHiddenDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PostService::new(&state.db)
        .set_hidden(post_id, payload.hidden)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Comments of a post, oldest first.
///
/// Deleted comments that still anchor replies are returned with empty content.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments: Vec<CommentDto> = CommentService::new(&state.db)
        .get_by_post(post_id)
        .await?
        .into_iter()
        .map(Comment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on a post or reply to a top-level comment.
///
/// # Access Control
/// - `Onboarded`
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid content or parent", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Onboarding not completed", body = ErrorDto),
        (status = 404, description = "Post or parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Onboarded])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams {
            post_id,
            author_id: user.id,
            parent_id: payload.parent_id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit a comment.
///
/// # Access Control
/// - Author of the comment
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = POST_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Empty content or deleted comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .update(&user, comment_id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// Comments with replies are only flagged deleted.
///
/// # Access Control
/// - Author of the comment or admin
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = POST_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CommentService::new(&state.db)
        .delete(&user, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
