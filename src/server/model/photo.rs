use chrono::{DateTime, Utc};

use crate::model::photo::PhotoDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub uploader_id: i32,
    pub schedule_id: Option<i32>,
    pub team_id: Option<i32>,
    /// Key of the object in the storage bucket.
    pub object_key: String,
    /// Public URL the object is served from.
    pub url: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            uploader_id: entity.uploader_id,
            schedule_id: entity.schedule_id,
            team_id: entity.team_id,
            object_key: entity.object_key,
            url: entity.url,
            content_type: entity.content_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            uploader_id: self.uploader_id,
            schedule_id: self.schedule_id,
            team_id: self.team_id,
            url: self.url,
            content_type: self.content_type,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePhotoParams {
    pub uploader_id: i32,
    pub schedule_id: Option<i32>,
    pub team_id: Option<i32>,
    pub object_key: String,
    pub url: String,
    pub content_type: String,
}

/// Image file received from a multipart upload, before it is stored.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub uploader_id: i32,
    pub schedule_id: Option<i32>,
    pub team_id: Option<i32>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
