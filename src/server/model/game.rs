//! Match, lineup and goal domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LineupSide, ScheduleStatus};

use crate::model::game::{
    AddMatchResultDto, GoalDto, LineupDto, LineupEntryDto, LineupSideDto, MatchDto,
    PlayerStatLineDto,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineupEntry {
    pub user_id: i32,
    pub side: LineupSide,
}

impl LineupEntry {
    pub fn from_dto(dto: LineupEntryDto) -> Self {
        Self {
            user_id: dto.user_id,
            side: dto.side.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    pub user_id: i32,
    pub user_name: String,
    pub side: LineupSide,
}

impl Lineup {
    pub fn into_dto(self) -> LineupDto {
        LineupDto {
            user_id: self.user_id,
            user_name: self.user_name,
            side: self.side.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub match_id: i32,
    pub scorer_id: i32,
    pub scorer_name: String,
    pub assist_id: Option<i32>,
    pub assist_name: Option<String>,
    /// Side credited with the goal.
    pub side: LineupSide,
    pub is_own_goal: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn into_dto(self) -> GoalDto {
        GoalDto {
            id: self.id,
            scorer_id: self.scorer_id,
            scorer_name: self.scorer_name,
            assist_id: self.assist_id,
            assist_name: self.assist_name,
            side: self.side.into(),
            is_own_goal: self.is_own_goal,
            created_at: self.created_at,
        }
    }
}

/// A single game played within a schedule, with its lineup and goals.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMatch {
    pub id: i32,
    pub schedule_id: i32,
    /// 1-based position of the match within its schedule.
    pub match_order: i32,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime<Utc>,
    pub lineups: Vec<Lineup>,
    pub goals: Vec<Goal>,
}

impl GameMatch {
    /// Converts a match row without lineups or goals.
    pub fn from_entity(entity: entity::game_match::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            match_order: entity.match_order,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            home_score: entity.home_score,
            away_score: entity.away_score,
            created_at: entity.created_at,
            lineups: Vec::new(),
            goals: Vec::new(),
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            schedule_id: self.schedule_id,
            match_order: self.match_order,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_score: self.home_score,
            away_score: self.away_score,
            lineups: self.lineups.into_iter().map(Lineup::into_dto).collect(),
            goals: self.goals.into_iter().map(Goal::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub schedule_id: i32,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub lineups: Vec<LineupEntry>,
}

/// New match and the schedule status after it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct AddMatchResult {
    pub game_match: GameMatch,
    pub schedule_status: ScheduleStatus,
}

impl AddMatchResult {
    pub fn into_dto(self) -> AddMatchResultDto {
        AddMatchResultDto {
            game_match: self.game_match.into_dto(),
            schedule_status: self.schedule_status.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGoalParams {
    pub match_id: i32,
    pub scorer_id: i32,
    pub assist_id: Option<i32>,
    pub side: LineupSide,
    pub is_own_goal: bool,
}

/// Goals and assists of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub user_id: i32,
    pub user_name: String,
    pub goals: u64,
    pub assists: u64,
}

impl PlayerStatLine {
    pub fn into_dto(self) -> PlayerStatLineDto {
        PlayerStatLineDto {
            user_id: self.user_id,
            user_name: self.user_name,
            goals: self.goals,
            assists: self.assists,
        }
    }
}

/// Orders stat lines by goals, then assists, both descending, then by name.
pub fn sort_stat_lines(lines: &mut [PlayerStatLine]) {
    lines.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| b.assists.cmp(&a.assists))
            .then_with(|| a.user_name.cmp(&b.user_name))
    });
}

impl From<LineupSide> for LineupSideDto {
    fn from(side: LineupSide) -> Self {
        match side {
            LineupSide::Home => Self::Home,
            LineupSide::Away => Self::Away,
            LineupSide::Undecided => Self::Undecided,
        }
    }
}

impl From<LineupSideDto> for LineupSide {
    fn from(side: LineupSideDto) -> Self {
        match side {
            LineupSideDto::Home => Self::Home,
            LineupSideDto::Away => Self::Away,
            LineupSideDto::Undecided => Self::Undecided,
        }
    }
}
