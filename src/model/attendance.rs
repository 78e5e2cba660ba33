use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatusDto {
    Attend,
    Absent,
    Undecided,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteAttendanceDto {
    pub status: AttendanceStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceDto {
    pub user_id: i32,
    pub user_name: String,
    pub team_id: i32,
    pub status: AttendanceStatusDto,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceSummaryDto {
    pub records: Vec<AttendanceDto>,
    pub attend: u64,
    pub absent: u64,
    pub undecided: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteMvpDto {
    pub target_user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MvpEntryDto {
    pub user_id: i32,
    pub user_name: String,
    pub votes: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MvpResultDto {
    pub entries: Vec<MvpEntryDto>,
    /// Set only when a single attendee has the most votes.
    pub mvp_user_id: Option<i32>,
}
