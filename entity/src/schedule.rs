use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{MatchType, ScheduleStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub host_team_id: i32,
    pub invited_team_id: Option<i32>,
    pub created_by: i32,
    pub match_type: MatchType,
    pub place: String,
    pub description: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub vote_deadline: DateTimeUtc,
    pub status: ScheduleStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HostTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HostTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::InvitedTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    InvitedTeam,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(has_many = "super::schedule_attendance::Entity")]
    ScheduleAttendance,
    #[sea_orm(has_many = "super::game_match::Entity")]
    GameMatch,
}

impl Related<super::schedule_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleAttendance.def()
    }
}

impl Related<super::game_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
