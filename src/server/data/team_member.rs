use chrono::Utc;
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::team::{TeamMember, TeamMemberWithUser};

pub struct TeamMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the membership of a user in a team, whatever its status.
    pub async fn find(&self, team_id: i32, user_id: i32) -> Result<Option<TeamMember>, DbErr> {
        let entity = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TeamMember::from_entity))
    }

    /// Creates a membership row.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - The created membership
    /// - `Err(DbErr)` - Database error, including a unique violation when the user already
    ///   has a membership in the team
    pub async fn create(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamMemberRole,
        status: TeamMemberStatus,
    ) -> Result<TeamMember, DbErr> {
        let entity = entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            status: ActiveValue::Set(status),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TeamMember::from_entity(entity))
    }

    /// Sets the status of a membership.
    pub async fn set_status(&self, id: i32, status: TeamMemberStatus) -> Result<TeamMember, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.status = ActiveValue::Set(status);

        let entity = active_model.update(self.db).await?;
        Ok(TeamMember::from_entity(entity))
    }

    /// Sets the role of a membership.
    pub async fn set_role(&self, id: i32, role: TeamMemberRole) -> Result<TeamMember, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.role = ActiveValue::Set(role);

        let entity = active_model.update(self.db).await?;
        Ok(TeamMember::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamMember::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all memberships of a team with the members' names, in join order.
    pub async fn get_by_team_with_users(
        &self,
        team_id: i32,
    ) -> Result<Vec<TeamMemberWithUser>, DbErr> {
        let rows = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .order_by_asc(entity::team_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                user.map(|user| TeamMemberWithUser {
                    member: TeamMember::from_entity(member),
                    name: user.name,
                    nickname: user.nickname,
                })
            })
            .collect())
    }

    /// Gets the user IDs of a team's approved members.
    pub async fn get_approved_user_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::Status.eq(TeamMemberStatus::Approved))
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.user_id).collect())
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::team_member::ActiveModel, DbErr> {
        let entity = entity::prelude::TeamMember::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Team member {} not found", id)))?;

        Ok(entity.into())
    }
}
