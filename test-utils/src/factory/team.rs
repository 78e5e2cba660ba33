//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
///
/// Only the team row is inserted; add the owner's membership with
/// `TeamMemberFactory` or use `helpers::create_team_with_owner`.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    region: Option<String>,
    is_deleted: bool,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Team {}", next_id()),
            region: None,
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            region: ActiveValue::Set(self.region),
            logo_url: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(self.owner_id),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team owned by `owner_id` with default values.
pub async fn create_team(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, owner_id).build().await
}
