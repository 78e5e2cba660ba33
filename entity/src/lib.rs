//! SeaORM entities for the futsal platform schema.

pub mod prelude;

pub mod bug_report;
pub mod comment;
pub mod feedback;
pub mod game_match;
pub mod goal_record;
pub mod lineup;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod schedule_attendance;
pub mod sea_orm_active_enums;
pub mod team;
pub mod team_member;
pub mod user;
