use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTypeDto {
    Squad,
    Team,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatusDto {
    Pending,
    Rejected,
    Confirmed,
    Ready,
    Play,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub host_team_id: i32,
    pub host_team_name: String,
    pub invited_team_id: Option<i32>,
    pub invited_team_name: Option<String>,
    pub created_by: i32,
    pub match_type: MatchTypeDto,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
    pub status: ScheduleStatusDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateScheduleDto {
    pub host_team_id: i32,
    pub invited_team_id: Option<i32>,
    pub match_type: MatchTypeDto,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateScheduleDto {
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InvitationResponseDto {
    pub accept: bool,
}
