use crate::server::{
    data::goal::GoalRepository, error::AppError, model::game::CreateGoalParams,
    service::user::UserService,
};
use entity::sea_orm_active_enums::{AttendanceStatus, LineupSide, PlayerPosition};
use test_utils::{builder::TestBuilder, factory};

mod complete_onboarding;
mod get_profile;
