pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_team_table;
mod m20260105_000003_create_team_member_table;
mod m20260106_000004_create_schedule_table;
mod m20260106_000005_create_schedule_attendance_table;
mod m20260106_000006_create_game_match_table;
mod m20260106_000007_create_lineup_table;
mod m20260106_000008_create_goal_record_table;
mod m20260107_000009_create_post_table;
mod m20260107_000010_create_comment_table;
mod m20260108_000011_create_photo_table;
mod m20260108_000012_create_feedback_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_team_table::Migration),
            Box::new(m20260105_000003_create_team_member_table::Migration),
            Box::new(m20260106_000004_create_schedule_table::Migration),
            Box::new(m20260106_000005_create_schedule_attendance_table::Migration),
            Box::new(m20260106_000006_create_game_match_table::Migration),
            Box::new(m20260106_000007_create_lineup_table::Migration),
            Box::new(m20260106_000008_create_goal_record_table::Migration),
            Box::new(m20260107_000009_create_post_table::Migration),
            Box::new(m20260107_000010_create_comment_table::Migration),
            Box::new(m20260108_000011_create_photo_table::Migration),
            Box::new(m20260108_000012_create_feedback_tables::Migration),
        ]
    }
}
