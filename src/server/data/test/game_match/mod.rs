use crate::server::{
    data::game_match::GameMatchRepository,
    model::game::{CreateMatchParams, LineupEntry},
};
use entity::sea_orm_active_enums::{LineupSide, ScheduleStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
