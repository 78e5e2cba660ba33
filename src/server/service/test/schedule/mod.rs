use crate::server::{
    data::photo::PhotoRepository,
    error::AppError,
    model::{photo::CreatePhotoParams, schedule::CreateScheduleParams},
    service::schedule::ScheduleService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MatchType, ScheduleStatus};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod respond_invitation;

fn params(
    host_team_id: i32,
    created_by: i32,
    match_type: MatchType,
    invited_team_id: Option<i32>,
) -> CreateScheduleParams {
    let start_time = Utc::now() + Duration::days(3);
    CreateScheduleParams {
        host_team_id,
        invited_team_id,
        created_by,
        match_type,
        place: "Riverside Arena".to_string(),
        description: None,
        start_time,
        end_time: start_time + Duration::hours(2),
        vote_deadline: start_time - Duration::hours(12),
    }
}

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
