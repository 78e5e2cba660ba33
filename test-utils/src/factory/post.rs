//! Post factory for bulletin board tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    team_id: Option<i32>,
    title: String,
    is_deleted: bool,
    is_hidden: bool,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            team_id: None,
            title: format!("Post {}", next_id()),
            is_deleted: false,
            is_hidden: false,
        }
    }

    pub fn team_id(mut self, team_id: Option<i32>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            team_id: ActiveValue::Set(self.team_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set("Anyone up for a game this weekend?".to_string()),
            is_deleted: ActiveValue::Set(self.is_deleted),
            is_hidden: ActiveValue::Set(self.is_hidden),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public, visible post by `author_id`.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
