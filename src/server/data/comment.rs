use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    model::post::{Comment, CreateCommentParams},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            author_id: ActiveValue::Set(params.author_id),
            parent_id: ActiveValue::Set(params.parent_id),
            content: ActiveValue::Set(params.content),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    /// Finds a comment with its author name, soft-deleted comments included.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_author(entity).await?))
    }

    /// Gets every comment of a post, oldest first, soft-deleted comments included.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        let author_ids: Vec<i32> = entities.iter().map(|c| c.author_id).collect();
        let names = UserRepository::new(self.db)
            .get_display_names(&author_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let author_name = names.get(&entity.author_id).cloned().unwrap_or_default();
                Comment::from_entity(entity, author_name)
            })
            .collect())
    }

    pub async fn update_content(&self, id: i32, content: String) -> Result<Comment, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Comment {} not found", id)))?;

        let mut active_model: entity::comment::ActiveModel = entity.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.with_author(entity).await
    }

    /// Counts direct replies to a comment, soft-deleted replies included.
    pub async fn count_replies(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.eq(id))
            .count(self.db)
            .await
    }

    /// Marks a comment deleted, keeping it as the anchor of its reply thread.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .col_expr(entity::comment::Column::IsDeleted, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Hard deletes a comment without replies, together with its parent when the parent was
    /// already soft-deleted and this was its last reply. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The parent was removed as well
    /// - `Ok(false)` - Only the comment was removed
    /// - `Err(DbErr::RecordNotFound)` - No comment with that ID
    pub async fn delete_with_orphaned_parent(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let comment = entity::prelude::Comment::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Comment {} not found", id)))?;

        entity::prelude::Comment::delete_by_id(comment.id)
            .exec(&txn)
            .await?;

        let mut parent_removed = false;
        if let Some(parent_id) = comment.parent_id {
            let parent = entity::prelude::Comment::find_by_id(parent_id)
                .one(&txn)
                .await?;
            let remaining_replies = entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentId.eq(parent_id))
                .count(&txn)
                .await?;

            if parent.is_some_and(|p| p.is_deleted) && remaining_replies == 0 {
                entity::prelude::Comment::delete_by_id(parent_id)
                    .exec(&txn)
                    .await?;
                parent_removed = true;
            }
        }

        txn.commit().await?;

        Ok(parent_removed)
    }

    async fn with_author(&self, entity: entity::comment::Model) -> Result<Comment, DbErr> {
        let names = UserRepository::new(self.db)
            .get_display_names(&[entity.author_id])
            .await?;
        let author_name = names.get(&entity.author_id).cloned().unwrap_or_default();

        Ok(Comment::from_entity(entity, author_name))
    }
}
