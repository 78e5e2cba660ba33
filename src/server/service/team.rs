//! Team management and membership workflow.

use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, team_member::TeamMemberRepository},
    error::{auth::AuthError, AppError},
    model::{
        team::{
            CreateTeamParams, PaginatedTeams, Team, TeamMember, TeamMemberWithUser,
            TeamWithCount, UpdateTeamParams,
        },
        user::User,
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team owned by `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(TeamWithCount)` - The new team, whose only member is the owner
    /// - `Err(AppError::BadRequest)` - Empty name or name used by another team
    pub async fn create(&self, params: CreateTeamParams) -> Result<TeamWithCount, AppError> {
        self.validate_name(&params.name, None).await?;

        let team = TeamRepository::new(self.db).create(params).await?;

        tracing::info!("Team {} ({}) created by user {}", team.name, team.id, team.owner_id);

        Ok(TeamWithCount {
            team,
            member_count: 1,
        })
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTeams, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let (teams, total) = team_repo.get_paginated(page, per_page).await?;
        let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
        let counts = team_repo.member_counts(&ids).await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedTeams {
            teams: teams
                .into_iter()
                .map(|team| TeamWithCount {
                    member_count: counts.get(&team.id).copied().unwrap_or(0),
                    team,
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a team with its approved member count. Deleted teams are not found.
    pub async fn get_by_id(&self, id: i32) -> Result<TeamWithCount, AppError> {
        let team = self.find_team(id).await?;

        let counts = TeamRepository::new(self.db).member_counts(&[id]).await?;

        Ok(TeamWithCount {
            member_count: counts.get(&id).copied().unwrap_or(0),
            team,
        })
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<TeamWithCount, AppError> {
        self.find_team(params.id).await?;
        self.validate_name(&params.name, Some(params.id)).await?;

        let id = params.id;
        TeamRepository::new(self.db).update(params).await?;

        self.get_by_id(id).await
    }

    /// Deletes a team.
    ///
    /// A team that is still referenced by a schedule, a board post or a photo is only
    /// flagged deleted, so that history survives. Otherwise the row is removed along with
    /// its memberships.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let team_repo = TeamRepository::new(self.db);
        self.find_team(id).await?;

        if team_repo.has_dependents(id).await? {
            team_repo.soft_delete(id).await?;
            tracing::info!("Team {} soft deleted", id);
        } else {
            team_repo.delete(id).await?;
            tracing::info!("Team {} deleted", id);
        }

        Ok(())
    }

    /// Files a join request, stored as a PENDING MEMBER membership.
    pub async fn request_join(&self, team_id: i32, user_id: i32) -> Result<TeamMember, AppError> {
        self.find_team(team_id).await?;

        let member_repo = TeamMemberRepository::new(self.db);
        if member_repo.find(team_id, user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "You are already a member of this team or your request is pending".to_string(),
            ));
        }

        Ok(member_repo
            .create(
                team_id,
                user_id,
                TeamMemberRole::Member,
                TeamMemberStatus::Pending,
            )
            .await?)
    }

    pub async fn approve_member(&self, team_id: i32, user_id: i32) -> Result<TeamMember, AppError> {
        let member = self.find_member(team_id, user_id).await?;

        if member.is_approved() {
            return Err(AppError::BadRequest(
                "Member is already approved".to_string(),
            ));
        }

        Ok(TeamMemberRepository::new(self.db)
            .set_status(member.id, TeamMemberStatus::Approved)
            .await?)
    }

    /// Changes an approved member's role between MANAGER and MEMBER.
    ///
    /// Ownership cannot be handed over this way and the owner's own role never changes.
    pub async fn change_role(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamMemberRole,
    ) -> Result<TeamMember, AppError> {
        if role == TeamMemberRole::Owner {
            return Err(AppError::BadRequest(
                "The OWNER role cannot be assigned".to_string(),
            ));
        }

        let member = self.find_member(team_id, user_id).await?;
        if member.is_owner() {
            return Err(AppError::BadRequest(
                "The owner's role cannot be changed".to_string(),
            ));
        }
        if !member.is_approved() {
            return Err(AppError::BadRequest(
                "Only approved members can be given a role".to_string(),
            ));
        }

        Ok(TeamMemberRepository::new(self.db)
            .set_role(member.id, role)
            .await?)
    }

    /// Removes a membership, or rejects a pending request.
    ///
    /// Any member may leave; removing someone else takes an OWNER or MANAGER (or an admin).
    /// The owner can never be removed.
    pub async fn remove_member(
        &self,
        team_id: i32,
        actor: &User,
        user_id: i32,
    ) -> Result<(), AppError> {
        let member_repo = TeamMemberRepository::new(self.db);
        let member = self.find_member(team_id, user_id).await?;

        if member.is_owner() {
            return Err(AppError::BadRequest(
                "The team owner cannot be removed".to_string(),
            ));
        }

        if actor.id != user_id && !actor.is_admin {
            let actor_can_manage = member_repo
                .find(team_id, actor.id)
                .await?
                .is_some_and(|m| m.can_manage());
            if !actor_can_manage {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("remove user {} from team {} without manager role", user_id, team_id),
                )
                .into());
            }
        }

        member_repo.delete(member.id).await?;

        Ok(())
    }

    pub async fn get_members(&self, team_id: i32) -> Result<Vec<TeamMemberWithUser>, AppError> {
        self.find_team(team_id).await?;

        Ok(TeamMemberRepository::new(self.db)
            .get_by_team_with_users(team_id)
            .await?)
    }

    async fn find_team(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    async fn find_member(&self, team_id: i32, user_id: i32) -> Result<TeamMember, AppError> {
        self.find_team(team_id).await?;

        TeamMemberRepository::new(self.db)
            .find(team_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    async fn validate_name(&self, name: &str, exclude_id: Option<i32>) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest("Team name is required".to_string()));
        }

        if TeamRepository::new(self.db)
            .name_taken(name, exclude_id)
            .await?
        {
            return Err(AppError::BadRequest("Team name already taken".to_string()));
        }

        Ok(())
    }
}
