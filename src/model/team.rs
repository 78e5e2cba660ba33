use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamMemberRoleDto {
    Owner,
    Manager,
    Member,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamMemberStatusDto {
    Pending,
    Approved,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
    pub owner_id: i32,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTeamsDto {
    pub teams: Vec<TeamDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTeamDto {
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamMemberDto {
    pub user_id: i32,
    pub name: String,
    pub nickname: Option<String>,
    pub role: TeamMemberRoleDto,
    pub status: TeamMemberStatusDto,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangeRoleDto {
    pub role: TeamMemberRoleDto,
}
