use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::PlayerPosition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub provider_id: String,
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    #[sea_orm(unique)]
    pub nickname: Option<String>,
    pub position: Option<PlayerPosition>,
    pub region: Option<String>,
    pub is_onboarded: bool,
    pub is_admin: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMember,
    #[sea_orm(has_many = "super::schedule_attendance::Entity")]
    ScheduleAttendance,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl Related<super::schedule_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleAttendance.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
