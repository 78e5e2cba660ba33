//! Schedule domain models and status rules.
//!
//! A schedule is either a SQUAD scrimmage inside one team or a TEAM fixture between a host
//! and an invited team. Its status moves through
//! `PENDING -> CONFIRMED | REJECTED` (invitation answer or expiry) and
//! `CONFIRMED -> READY -> PLAY` as matches get recorded.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MatchType, ScheduleStatus};

use crate::{
    model::schedule::{
        CreateScheduleDto, MatchTypeDto, ScheduleDto, ScheduleStatusDto, UpdateScheduleDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub host_team_id: i32,
    pub invited_team_id: Option<i32>,
    pub created_by: i32,
    pub match_type: MatchType,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            host_team_id: entity.host_team_id,
            invited_team_id: entity.invited_team_id,
            created_by: entity.created_by,
            match_type: entity.match_type,
            place: entity.place,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            vote_deadline: entity.vote_deadline,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Whether attendance votes and match records may be added in the current status.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ScheduleStatus::Confirmed | ScheduleStatus::Ready | ScheduleStatus::Play
        )
    }

    /// Whether MVP voting is open, which requires at least one recorded match.
    pub fn accepts_mvp_votes(&self) -> bool {
        matches!(self.status, ScheduleStatus::Ready | ScheduleStatus::Play)
    }

    /// Teams whose members take part: the host, plus the invited team for TEAM fixtures.
    pub fn team_ids(&self) -> Vec<i32> {
        let mut ids = vec![self.host_team_id];
        if self.match_type == MatchType::Team {
            if let Some(invited) = self.invited_team_id {
                ids.push(invited);
            }
        }
        ids
    }
}

/// Schedule joined with its team names.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleWithTeams {
    pub schedule: Schedule,
    pub host_team_name: String,
    pub invited_team_name: Option<String>,
}

impl ScheduleWithTeams {
    pub fn into_dto(self) -> ScheduleDto {
        let s = self.schedule;
        ScheduleDto {
            id: s.id,
            host_team_id: s.host_team_id,
            host_team_name: self.host_team_name,
            invited_team_id: s.invited_team_id,
            invited_team_name: self.invited_team_name,
            created_by: s.created_by,
            match_type: s.match_type.into(),
            place: s.place,
            description: s.description,
            start_time: s.start_time,
            end_time: s.end_time,
            vote_deadline: s.vote_deadline,
            status: s.status.into(),
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub host_team_id: i32,
    pub invited_team_id: Option<i32>,
    pub created_by: i32,
    pub match_type: MatchType,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
}

impl CreateScheduleParams {
    pub fn from_dto(created_by: i32, dto: CreateScheduleDto) -> Self {
        Self {
            host_team_id: dto.host_team_id,
            invited_team_id: dto.invited_team_id,
            created_by,
            match_type: dto.match_type.into(),
            place: dto.place.trim().to_string(),
            description: dto.description,
            start_time: dto.start_time,
            end_time: dto.end_time,
            vote_deadline: dto.vote_deadline,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateScheduleParams {
    pub id: i32,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_deadline: DateTime<Utc>,
}

impl UpdateScheduleParams {
    pub fn from_dto(id: i32, dto: UpdateScheduleDto) -> Self {
        Self {
            id,
            place: dto.place.trim().to_string(),
            description: dto.description,
            start_time: dto.start_time,
            end_time: dto.end_time,
            vote_deadline: dto.vote_deadline,
        }
    }
}

/// Validates the place and time window shared by schedule creation and updates.
///
/// # Returns
/// - `Ok(())` - Place is non-empty, end is after start and voting closes no later than start
/// - `Err(AppError::BadRequest)` - Any of the above does not hold
pub fn validate_schedule_window(
    place: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    vote_deadline: DateTime<Utc>,
) -> Result<(), AppError> {
    if place.is_empty() {
        return Err(AppError::BadRequest("Place is required".to_string()));
    }
    if end_time <= start_time {
        return Err(AppError::BadRequest(
            "End time must be after start time".to_string(),
        ));
    }
    if vote_deadline > start_time {
        return Err(AppError::BadRequest(
            "Vote deadline must not be after start time".to_string(),
        ));
    }
    Ok(())
}

/// Status a schedule starts in.
///
/// SQUAD scrimmages need nobody's consent; TEAM fixtures wait for the invited team.
pub fn initial_status(match_type: MatchType) -> ScheduleStatus {
    match match_type {
        MatchType::Squad => ScheduleStatus::Confirmed,
        MatchType::Team => ScheduleStatus::Pending,
    }
}

/// Status a schedule moves to once a match has been recorded for it.
///
/// # Arguments
/// - `match_type` - SQUAD or TEAM
/// - `status` - Current status
/// - `host_attending` - Host team has at least one ATTEND record
/// - `invited_attending` - Invited team has at least one ATTEND record
pub fn status_after_match_added(
    match_type: MatchType,
    status: ScheduleStatus,
    host_attending: bool,
    invited_attending: bool,
) -> ScheduleStatus {
    match (match_type, status) {
        (MatchType::Squad, ScheduleStatus::Confirmed) => ScheduleStatus::Ready,
        (MatchType::Team, _) if host_attending && invited_attending => ScheduleStatus::Play,
        (MatchType::Team, ScheduleStatus::Confirmed) => ScheduleStatus::Ready,
        (_, status) => status,
    }
}

impl From<MatchType> for MatchTypeDto {
    fn from(match_type: MatchType) -> Self {
        match match_type {
            MatchType::Squad => Self::Squad,
            MatchType::Team => Self::Team,
        }
    }
}

impl From<MatchTypeDto> for MatchType {
    fn from(match_type: MatchTypeDto) -> Self {
        match match_type {
            MatchTypeDto::Squad => Self::Squad,
            MatchTypeDto::Team => Self::Team,
        }
    }
}

impl From<ScheduleStatus> for ScheduleStatusDto {
    fn from(status: ScheduleStatus) -> Self {
        match status {
            ScheduleStatus::Pending => Self::Pending,
            ScheduleStatus::Rejected => Self::Rejected,
            ScheduleStatus::Confirmed => Self::Confirmed,
            ScheduleStatus::Ready => Self::Ready,
            ScheduleStatus::Play => Self::Play,
        }
    }
}
