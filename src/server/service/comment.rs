//! Post comments and one level of replies.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::{auth::AuthError, AppError},
    model::{
        post::{Comment, CreateCommentParams},
        user::User,
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a post's comments oldest first, soft-deleted ones included as thread anchors.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        self.ensure_post(post_id).await?;

        Ok(CommentRepository::new(self.db).get_by_post(post_id).await?)
    }

    /// Adds a comment, or a reply when `parent_id` is set.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - Post or parent comment does not exist
    /// - `Err(AppError::BadRequest)` - Empty content, or a parent that is on another post,
    ///   is itself a reply, or was deleted
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        self.ensure_post(params.post_id).await?;

        if let Some(parent_id) = params.parent_id {
            let parent = self.find_comment(parent_id).await?;

            if parent.post_id != params.post_id {
                return Err(AppError::BadRequest(
                    "Parent comment belongs to another post".to_string(),
                ));
            }
            if parent.parent_id.is_some() {
                return Err(AppError::BadRequest(
                    "Replies cannot be replied to".to_string(),
                ));
            }
            if parent.is_deleted {
                return Err(AppError::BadRequest(
                    "Cannot reply to a deleted comment".to_string(),
                ));
            }
        }

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let comment = self.find_comment(id).await?;

        if comment.author_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("edit comment {} written by user {}", id, comment.author_id),
            )
            .into());
        }
        if comment.is_deleted {
            return Err(AppError::BadRequest(
                "Deleted comments cannot be edited".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        Ok(CommentRepository::new(self.db)
            .update_content(id, content)
            .await?)
    }

    /// Deletes a comment.
    ///
    /// A comment with replies is soft deleted to keep the thread. Otherwise it is removed,
    /// and a soft-deleted parent left without replies is removed with it.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let comment = self.find_comment(id).await?;

        if comment.author_id != actor.id && !actor.is_admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("delete comment {} written by user {}", id, comment.author_id),
            )
            .into());
        }

        if comment_repo.count_replies(id).await? > 0 {
            comment_repo.soft_delete(id).await?;
        } else if comment_repo.delete_with_orphaned_parent(id).await? {
            tracing::debug!("Removed orphaned parent of comment {}", id);
        }

        Ok(())
    }

    async fn ensure_post(&self, post_id: i32) -> Result<(), AppError> {
        let exists = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .is_some_and(|p| !p.is_deleted);

        if !exists {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        Ok(())
    }

    async fn find_comment(&self, id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }
}
