use crate::server::{
    error::AppError,
    service::{mvp::MvpService, schedule::ScheduleService},
};
use entity::sea_orm_active_enums::{AttendanceStatus, ScheduleStatus};
use test_utils::{builder::TestBuilder, factory};

mod vote;
