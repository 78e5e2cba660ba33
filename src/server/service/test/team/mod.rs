use crate::server::{
    error::{auth::AuthError, AppError},
    model::{team::CreateTeamParams, user::User},
    service::team::TeamService,
};
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod membership;
