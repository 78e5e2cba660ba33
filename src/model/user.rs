use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerPositionDto {
    Pivo,
    Ala,
    Fixo,
    Goleiro,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub nickname: Option<String>,
    pub position: Option<PlayerPositionDto>,
    pub region: Option<String>,
    pub is_onboarded: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OnboardingDto {
    pub nickname: String,
    pub position: PlayerPositionDto,
    pub region: Option<String>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub nickname: Option<String>,
    pub position: Option<PlayerPositionDto>,
    pub region: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerStatsDto {
    pub attended_schedules: u64,
    pub goals: u64,
    pub assists: u64,
    pub mvp_votes: u64,
    pub mvp_awards: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    pub stats: PlayerStatsDto,
}
