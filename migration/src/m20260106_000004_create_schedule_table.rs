use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000002_create_team_table::Team};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::HostTeamId))
                    .col(integer_null(Schedule::InvitedTeamId))
                    .col(integer(Schedule::CreatedBy))
                    .col(string_len(Schedule::MatchType, 16))
                    .col(string(Schedule::Place))
                    .col(text_null(Schedule::Description))
                    .col(timestamp(Schedule::StartTime))
                    .col(timestamp(Schedule::EndTime))
                    .col(timestamp(Schedule::VoteDeadline))
                    .col(string_len(Schedule::Status, 16))
                    .col(
                        timestamp(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_host_team_id")
                            .from(Schedule::Table, Schedule::HostTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_invited_team_id")
                            .from(Schedule::Table, Schedule::InvitedTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_created_by")
                            .from(Schedule::Table, Schedule::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_start_time")
                    .table(Schedule::Table)
                    .col(Schedule::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    HostTeamId,
    InvitedTeamId,
    CreatedBy,
    MatchType,
    Place,
    Description,
    StartTime,
    EndTime,
    VoteDeadline,
    Status,
    CreatedAt,
}
