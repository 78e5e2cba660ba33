use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_team_table::Team,
    m20260106_000004_create_schedule_table::Schedule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduleAttendance::Id))
                    .col(integer(ScheduleAttendance::ScheduleId))
                    .col(integer(ScheduleAttendance::UserId))
                    .col(integer(ScheduleAttendance::TeamId))
                    .col(string_len(ScheduleAttendance::Status, 16))
                    .col(integer_null(ScheduleAttendance::MvpTargetId))
                    .col(integer(ScheduleAttendance::MvpCount).default(0))
                    .col(
                        timestamp(ScheduleAttendance::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_attendance_schedule_id")
                            .from(ScheduleAttendance::Table, ScheduleAttendance::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_attendance_user_id")
                            .from(ScheduleAttendance::Table, ScheduleAttendance::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_attendance_team_id")
                            .from(ScheduleAttendance::Table, ScheduleAttendance::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_attendance_schedule_user")
                    .table(ScheduleAttendance::Table)
                    .col(ScheduleAttendance::ScheduleId)
                    .col(ScheduleAttendance::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleAttendance {
    Table,
    Id,
    ScheduleId,
    UserId,
    TeamId,
    Status,
    MvpTargetId,
    MvpCount,
    UpdatedAt,
}
