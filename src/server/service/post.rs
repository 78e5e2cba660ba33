//! Bulletin board posts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, team::TeamRepository},
    error::{auth::AuthError, AppError},
    model::{
        post::{CreatePostParams, PaginatedPosts, Post, UpdatePostParams},
        user::User,
    },
};

const MAX_TITLE_LENGTH: usize = 100;

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        team_id: Option<i32>,
    ) -> Result<PaginatedPosts, AppError> {
        let (posts, total) = PostRepository::new(self.db)
            .get_paginated(page, per_page, team_id)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedPosts {
            posts,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Creates a post on the general board or a team board.
    ///
    /// Team membership is checked by the caller; this only verifies the team exists. The
    /// title is stored trimmed.
    pub async fn create(&self, mut params: CreatePostParams) -> Result<Post, AppError> {
        params.title = params.title.trim().to_string();
        validate_post(&params.title, &params.content)?;

        if let Some(team_id) = params.team_id {
            if TeamRepository::new(self.db)
                .find_active_by_id(team_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Team not found".to_string()));
            }
        }

        Ok(PostRepository::new(self.db).create(params).await?)
    }

    /// Gets a post for display and counts the view.
    ///
    /// Deleted posts are never returned. Hidden posts are only shown to their author and
    /// to admins.
    pub async fn get_by_id(&self, id: i32, viewer: Option<&User>) -> Result<Post, AppError> {
        let mut post = self.find_post(id).await?;

        let may_see_hidden = viewer.is_some_and(|u| u.is_admin || u.id == post.author_id);
        if post.is_hidden && !may_see_hidden {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        PostRepository::new(self.db)
            .increment_view_count(id)
            .await?;
        post.view_count += 1;

        Ok(post)
    }

    pub async fn update(
        &self,
        actor: &User,
        mut params: UpdatePostParams,
    ) -> Result<Post, AppError> {
        let post = self.find_post(params.id).await?;

        if post.author_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("edit post {} written by user {}", post.id, post.author_id),
            )
            .into());
        }

        params.title = params.title.trim().to_string();
        validate_post(&params.title, &params.content)?;

        Ok(PostRepository::new(self.db).update(params).await?)
    }

    /// Deletes a post.
    ///
    /// Posts with comments are flagged deleted so the thread remains for audit; posts
    /// without comments are removed.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let post_repo = PostRepository::new(self.db);
        let post = self.find_post(id).await?;

        if post.author_id != actor.id && !actor.is_admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("delete post {} written by user {}", post.id, post.author_id),
            )
            .into());
        }

        if post_repo.count_comments(id).await? > 0 {
            post_repo.soft_delete(id).await?;
        } else {
            post_repo.delete(id).await?;
        }

        tracing::info!("Post {} deleted by user {}", id, actor.id);

        Ok(())
    }

    pub async fn set_hidden(&self, id: i32, hidden: bool) -> Result<(), AppError> {
        self.find_post(id).await?;

        PostRepository::new(self.db).set_hidden(id, hidden).await?;

        Ok(())
    }

    /// Finds a post that has not been deleted.
    async fn find_post(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|p| !p.is_deleted)
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}

fn validate_post(title: &str, content: &str) -> Result<(), AppError> {
    let title_length = title.trim().chars().count();
    if title_length == 0 || title_length > MAX_TITLE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Title must be between 1 and {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }
    Ok(())
}
