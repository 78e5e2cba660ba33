use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260106_000006_create_game_match_table::GameMatch,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GoalRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(GoalRecord::Id))
                    .col(integer(GoalRecord::MatchId))
                    .col(integer(GoalRecord::ScorerId))
                    .col(integer_null(GoalRecord::AssistId))
                    .col(string_len(GoalRecord::Side, 16))
                    .col(boolean(GoalRecord::IsOwnGoal).default(false))
                    .col(
                        timestamp(GoalRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_record_match_id")
                            .from(GoalRecord::Table, GoalRecord::MatchId)
                            .to(GameMatch::Table, GameMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_record_scorer_id")
                            .from(GoalRecord::Table, GoalRecord::ScorerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_record_assist_id")
                            .from(GoalRecord::Table, GoalRecord::AssistId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GoalRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GoalRecord {
    Table,
    Id,
    MatchId,
    ScorerId,
    AssistId,
    Side,
    IsOwnGoal,
    CreatedAt,
}
