use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateProfileParams, UpsertUserParam},
};
use entity::sea_orm_active_enums::PlayerPosition;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_display_names;
