//! User domain models and parameters.
//!
//! Users are created on first OAuth login and become players once they complete onboarding
//! with a nickname and preferred position.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PlayerPosition;

use crate::model::user::{PlayerPositionDto, PlayerStatsDto, UserDto, UserProfileDto};

/// Signed-in account with its player profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject identifier assigned by the OAuth provider.
    pub provider_id: String,
    /// Name reported by the OAuth provider.
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    /// Unique nickname chosen during onboarding.
    pub nickname: Option<String>,
    pub position: Option<PlayerPosition>,
    pub region: Option<String>,
    pub is_onboarded: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            image: self.image,
            nickname: self.nickname,
            position: self.position.map(PlayerPositionDto::from),
            region: self.region,
            is_onboarded: self.is_onboarded,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            provider_id: entity.provider_id,
            name: entity.name,
            email: entity.email,
            image: entity.image,
            nickname: entity.nickname,
            position: entity.position,
            region: entity.region,
            is_onboarded: entity.is_onboarded,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }
}

/// Name shown for a user in lineups, attendance lists and boards.
///
/// The onboarding nickname when set, otherwise the provider name.
pub fn display_name(nickname: Option<String>, name: String) -> String {
    nickname.unwrap_or(name)
}

/// Parameters for upserting a user during the OAuth callback.
///
/// `is_admin` only ever raises the flag: `Some(true)` grants admin, `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub provider_id: String,
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub is_admin: Option<bool>,
}

/// Profile fields written by onboarding or a profile update.
///
/// `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub nickname: Option<String>,
    pub position: Option<PlayerPosition>,
    pub region: Option<String>,
    pub image: Option<String>,
    /// Sets `is_onboarded` when true. Never clears it.
    pub mark_onboarded: bool,
}

/// Career totals shown on a player's profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    /// Schedules the player voted to attend.
    pub attended_schedules: u64,
    /// Goals scored, own goals excluded.
    pub goals: u64,
    pub assists: u64,
    /// MVP votes received across all schedules.
    pub mvp_votes: u64,
    /// Schedules where the player alone had the most MVP votes.
    pub mvp_awards: u64,
}

impl PlayerStats {
    pub fn into_dto(self) -> PlayerStatsDto {
        PlayerStatsDto {
            attended_schedules: self.attended_schedules,
            goals: self.goals,
            assists: self.assists,
            mvp_votes: self.mvp_votes,
            mvp_awards: self.mvp_awards,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub stats: PlayerStats,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user: self.user.into_dto(),
            stats: self.stats.into_dto(),
        }
    }
}

impl From<PlayerPosition> for PlayerPositionDto {
    fn from(position: PlayerPosition) -> Self {
        match position {
            PlayerPosition::Pivo => Self::Pivo,
            PlayerPosition::Ala => Self::Ala,
            PlayerPosition::Fixo => Self::Fixo,
            PlayerPosition::Goleiro => Self::Goleiro,
        }
    }
}

impl From<PlayerPositionDto> for PlayerPosition {
    fn from(position: PlayerPositionDto) -> Self {
        match position {
            PlayerPositionDto::Pivo => Self::Pivo,
            PlayerPositionDto::Ala => Self::Ala,
            PlayerPositionDto::Fixo => Self::Fixo,
            PlayerPositionDto::Goleiro => Self::Goleiro,
        }
    }
}
