//! Bulletin board domain models.

use chrono::{DateTime, Utc};

use crate::model::post::{CommentDto, PaginatedPostsDto, PostDto, PostListItemDto};

/// Post joined with its author's display name and comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub team_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub is_deleted: bool,
    pub is_hidden: bool,
    pub view_count: i32,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(
        entity: entity::post::Model,
        author_name: String,
        comment_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            author_name,
            team_id: entity.team_id,
            title: entity.title,
            content: entity.content,
            is_deleted: entity.is_deleted,
            is_hidden: entity.is_hidden,
            view_count: entity.view_count,
            comment_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            author_id: self.author_id,
            author_name: self.author_name,
            team_id: self.team_id,
            title: self.title,
            content: self.content,
            view_count: self.view_count,
            comment_count: self.comment_count,
            is_hidden: self.is_hidden,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_list_item_dto(self) -> PostListItemDto {
        PostListItemDto {
            id: self.id,
            author_id: self.author_id,
            author_name: self.author_name,
            team_id: self.team_id,
            title: self.title,
            view_count: self.view_count,
            comment_count: self.comment_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        PaginatedPostsDto {
            posts: self
                .posts
                .into_iter()
                .map(Post::into_list_item_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub team_id: Option<i32>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub parent_id: Option<i32>,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            author_name,
            parent_id: entity.parent_id,
            content: entity.content,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to a DTO, blanking the content of soft-deleted comments.
    pub fn into_dto(self) -> CommentDto {
        let content = if self.is_deleted {
            String::new()
        } else {
            self.content
        };

        CommentDto {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            author_name: self.author_name,
            parent_id: self.parent_id,
            content,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub author_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
}
