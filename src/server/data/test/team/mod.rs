use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod name_taken;
mod update;
