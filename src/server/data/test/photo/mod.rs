use crate::server::{data::photo::PhotoRepository, model::photo::CreatePhotoParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn photo(uploader_id: i32, schedule_id: Option<i32>, team_id: Option<i32>) -> CreatePhotoParams {
    let key = format!("photos/2026/01/{}.jpg", factory::helpers::next_id());
    CreatePhotoParams {
        uploader_id,
        schedule_id,
        team_id,
        url: format!("https://cdn.example.com/{}", key),
        object_key: key,
        content_type: "image/jpeg".to_string(),
    }
}
