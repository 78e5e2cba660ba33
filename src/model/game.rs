use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::schedule::ScheduleStatusDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineupSideDto {
    Home,
    Away,
    Undecided,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LineupEntryDto {
    pub user_id: i32,
    pub side: LineupSideDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMatchDto {
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    #[serde(default)]
    pub lineups: Vec<LineupEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateLineupDto {
    pub lineups: Vec<LineupEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LineupDto {
    pub user_id: i32,
    pub user_name: String,
    pub side: LineupSideDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GoalDto {
    pub id: i32,
    pub scorer_id: i32,
    pub scorer_name: String,
    pub assist_id: Option<i32>,
    pub assist_name: Option<String>,
    pub side: LineupSideDto,
    pub is_own_goal: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub schedule_id: i32,
    pub match_order: i32,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
    pub lineups: Vec<LineupDto>,
    pub goals: Vec<GoalDto>,
    pub created_at: DateTime<Utc>,
}

/// Result of adding a match: the new match and the schedule status after derivation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddMatchResultDto {
    pub game_match: MatchDto,
    pub schedule_status: ScheduleStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGoalDto {
    pub scorer_id: i32,
    pub assist_id: Option<i32>,
    pub side: LineupSideDto,
    #[serde(default)]
    pub is_own_goal: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerStatLineDto {
    pub user_id: i32,
    pub user_name: String,
    pub goals: u64,
    pub assists: u64,
}
