use crate::server::data::team_member::TeamMemberRepository;
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_role;
