use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMatch::Id))
                    .col(integer(GameMatch::ScheduleId))
                    .col(integer(GameMatch::MatchOrder))
                    .col(integer_null(GameMatch::HomeTeamId))
                    .col(integer_null(GameMatch::AwayTeamId))
                    .col(integer(GameMatch::HomeScore).default(0))
                    .col(integer(GameMatch::AwayScore).default(0))
                    .col(
                        timestamp(GameMatch::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_match_schedule_id")
                            .from(GameMatch::Table, GameMatch::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMatch {
    Table,
    Id,
    ScheduleId,
    MatchOrder,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    CreatedAt,
}
