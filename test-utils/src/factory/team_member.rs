//! Team member factory for creating membership rows.

use chrono::Utc;
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for team memberships.
///
/// Defaults to an APPROVED plain MEMBER.
pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    user_id: i32,
    role: TeamMemberRole,
    status: TeamMemberStatus,
}

impl<'a> TeamMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_id: i32, user_id: i32) -> Self {
        Self {
            db,
            team_id,
            user_id,
            role: TeamMemberRole::Member,
            status: TeamMemberStatus::Approved,
        }
    }

    pub fn role(mut self, role: TeamMemberRole) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: TeamMemberStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved MEMBER membership.
pub async fn create_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db, team_id, user_id).build().await
}
