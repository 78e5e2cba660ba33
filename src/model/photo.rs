use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub uploader_id: i32,
    pub schedule_id: Option<i32>,
    pub team_id: Option<i32>,
    pub url: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

/// Multipart form accepted by the photo upload endpoint. Documentation only.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadPhotoForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub schedule_id: Option<i32>,
    pub team_id: Option<i32>,
}
