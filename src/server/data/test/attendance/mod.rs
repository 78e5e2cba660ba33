use crate::server::{
    data::attendance::AttendanceRepository, model::attendance::VoteAttendanceParams,
};
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_mvp_totals_for_user;
mod vote_mvp;
