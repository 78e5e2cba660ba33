use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::LineupSide;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "goal_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub scorer_id: i32,
    pub assist_id: Option<i32>,
    /// Side credited with the goal.
    pub side: LineupSide,
    pub is_own_goal: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_match::Entity",
        from = "Column::MatchId",
        to = "super::game_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GameMatch,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ScorerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Scorer,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssistId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Assist,
}

impl Related<super::game_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
