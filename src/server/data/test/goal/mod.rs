use crate::server::{data::goal::GoalRepository, model::game::CreateGoalParams};
use entity::sea_orm_active_enums::LineupSide;
use sea_orm::{sea_query::Expr, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod stats;

fn goal(
    match_id: i32,
    scorer_id: i32,
    assist_id: Option<i32>,
    side: LineupSide,
) -> CreateGoalParams {
    CreateGoalParams {
        match_id,
        scorer_id,
        assist_id,
        side,
        is_own_goal: false,
    }
}
