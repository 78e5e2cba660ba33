use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::photo::{CreatePhotoParams, Photo};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePhotoParams) -> Result<Photo, DbErr> {
        let entity = entity::photo::ActiveModel {
            uploader_id: ActiveValue::Set(params.uploader_id),
            schedule_id: ActiveValue::Set(params.schedule_id),
            team_id: ActiveValue::Set(params.team_id),
            object_key: ActiveValue::Set(params.object_key),
            url: ActiveValue::Set(params.url),
            content_type: ActiveValue::Set(params.content_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Photo::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Photo>, DbErr> {
        let entity = entity::prelude::Photo::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Photo::from_entity))
    }

    /// Gets photos attached to a schedule, newest first.
    pub async fn get_by_schedule(&self, schedule_id: i32) -> Result<Vec<Photo>, DbErr> {
        let entities = entity::prelude::Photo::find()
            .filter(entity::photo::Column::ScheduleId.eq(schedule_id))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .order_by_desc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Photo::from_entity).collect())
    }

    /// Gets photos attached to a team, newest first.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Photo>, DbErr> {
        let entities = entity::prelude::Photo::find()
            .filter(entity::photo::Column::TeamId.eq(team_id))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .order_by_desc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Photo::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Photo::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
