use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub schedule_id: i32,
    pub match_order: i32,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule::Entity",
        from = "Column::ScheduleId",
        to = "super::schedule::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Schedule,
    #[sea_orm(has_many = "super::lineup::Entity")]
    Lineup,
    #[sea_orm(has_many = "super::goal_record::Entity")]
    GoalRecord,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl Related<super::lineup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lineup.def()
    }
}

impl Related<super::goal_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GoalRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
