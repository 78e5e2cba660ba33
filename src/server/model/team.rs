//! Team and membership domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};

use crate::model::team::{
    CreateTeamDto, PaginatedTeamsDto, TeamDto, TeamMemberDto, TeamMemberRoleDto,
    TeamMemberStatusDto, UpdateTeamDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
    pub owner_id: i32,
    /// Set when the team was deleted while schedules still referenced it.
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            region: entity.region,
            logo_url: entity.logo_url,
            owner_id: entity.owner_id,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self, member_count: u64) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            description: self.description,
            region: self.region,
            logo_url: self.logo_url,
            owner_id: self.owner_id,
            member_count,
            created_at: self.created_at,
        }
    }
}

/// Team together with its number of approved members.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithCount {
    pub team: Team,
    pub member_count: u64,
}

impl TeamWithCount {
    pub fn into_dto(self) -> TeamDto {
        self.team.into_dto(self.member_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTeams {
    pub teams: Vec<TeamWithCount>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTeams {
    pub fn into_dto(self) -> PaginatedTeamsDto {
        PaginatedTeamsDto {
            teams: self.teams.into_iter().map(TeamWithCount::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
}

impl CreateTeamParams {
    pub fn from_dto(owner_id: i32, dto: CreateTeamDto) -> Self {
        Self {
            owner_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            region: dto.region,
            logo_url: dto.logo_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub logo_url: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            region: dto.region,
            logo_url: dto.logo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: i32,
    pub team_id: i32,
    pub user_id: i32,
    pub role: TeamMemberRole,
    pub status: TeamMemberStatus,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            user_id: entity.user_id,
            role: entity.role,
            status: entity.status,
            joined_at: entity.joined_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == TeamMemberStatus::Approved
    }

    /// Approved owner or manager, allowed to administer the team and its schedules.
    pub fn can_manage(&self) -> bool {
        self.is_approved() && matches!(self.role, TeamMemberRole::Owner | TeamMemberRole::Manager)
    }

    pub fn is_owner(&self) -> bool {
        self.role == TeamMemberRole::Owner
    }
}

/// Membership row joined with the member's user names.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberWithUser {
    pub member: TeamMember,
    pub name: String,
    pub nickname: Option<String>,
}

impl TeamMemberWithUser {
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            user_id: self.member.user_id,
            name: self.name,
            nickname: self.nickname,
            role: self.member.role.into(),
            status: self.member.status.into(),
            joined_at: self.member.joined_at,
        }
    }
}

impl From<TeamMemberRole> for TeamMemberRoleDto {
    fn from(role: TeamMemberRole) -> Self {
        match role {
            TeamMemberRole::Owner => Self::Owner,
            TeamMemberRole::Manager => Self::Manager,
            TeamMemberRole::Member => Self::Member,
        }
    }
}

impl From<TeamMemberRoleDto> for TeamMemberRole {
    fn from(role: TeamMemberRoleDto) -> Self {
        match role {
            TeamMemberRoleDto::Owner => Self::Owner,
            TeamMemberRoleDto::Manager => Self::Manager,
            TeamMemberRoleDto::Member => Self::Member,
        }
    }
}

impl From<TeamMemberStatus> for TeamMemberStatusDto {
    fn from(status: TeamMemberStatus) -> Self {
        match status {
            TeamMemberStatus::Pending => Self::Pending,
            TeamMemberStatus::Approved => Self::Approved,
        }
    }
}
