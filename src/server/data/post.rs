//! Bulletin board post repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::post::{CreatePostParams, Post, UpdatePostParams},
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            team_id: ActiveValue::Set(params.team_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            is_deleted: ActiveValue::Set(false),
            is_hidden: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut posts = self.attach_details(vec![entity]).await?;
        posts
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("Created post not found".to_string()))
    }

    /// Finds a post with author name and comment count, whatever its flags.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.attach_details(vec![entity]).await?.pop())
    }

    /// Gets visible posts, newest first, optionally limited to one team's board.
    ///
    /// Deleted and hidden posts are excluded.
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts for the page and the total number of visible posts
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        team_id: Option<i32>,
    ) -> Result<(Vec<Post>, u64), DbErr> {
        let mut query = entity::prelude::Post::find()
            .filter(entity::post::Column::IsDeleted.eq(false))
            .filter(entity::post::Column::IsHidden.eq(false));
        if let Some(team_id) = team_id {
            query = query.filter(entity::post::Column::TeamId.eq(team_id));
        }

        let paginator = query
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let posts = self.attach_details(entities).await?;

        Ok((posts, total))
    }

    pub async fn update(&self, params: UpdatePostParams) -> Result<Post, DbErr> {
        let mut active_model = self.find_active_model(params.id).await?;
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        let mut posts = self.attach_details(vec![entity]).await?;
        posts
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Post {} not found", params.id)))
    }

    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .col_expr(
                entity::post::Column::ViewCount,
                Expr::col(entity::post::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_hidden(&self, id: i32, hidden: bool) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .col_expr(entity::post::Column::IsHidden, Expr::value(hidden))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks a post deleted. Its content stays in the table but is never served.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .col_expr(entity::post::Column::IsDeleted, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Counts all comments of a post, soft-deleted ones included.
    pub async fn count_comments(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }

    async fn attach_details(&self, entities: Vec<entity::post::Model>) -> Result<Vec<Post>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = entities.iter().map(|p| p.id).collect();
        let author_ids: Vec<i32> = entities.iter().map(|p| p.author_id).collect();

        let names = UserRepository::new(self.db)
            .get_display_names(&author_ids)
            .await?;

        let mut comment_counts: HashMap<i32, u64> = HashMap::new();
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.is_in(post_ids))
            .filter(entity::comment::Column::IsDeleted.eq(false))
            .all(self.db)
            .await?;
        for comment in comments {
            *comment_counts.entry(comment.post_id).or_insert(0) += 1;
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let author_name = names.get(&entity.author_id).cloned().unwrap_or_default();
                let comment_count = comment_counts.get(&entity.id).copied().unwrap_or(0);
                Post::from_entity(entity, author_name, comment_count)
            })
            .collect())
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::post::ActiveModel, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Post {} not found", id)))?;

        Ok(entity.into())
    }
}
