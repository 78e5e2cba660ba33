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
                    .table(Lineup::Table)
                    .if_not_exists()
                    .col(pk_auto(Lineup::Id))
                    .col(integer(Lineup::MatchId))
                    .col(integer(Lineup::UserId))
                    .col(string_len(Lineup::Side, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_match_id")
                            .from(Lineup::Table, Lineup::MatchId)
                            .to(GameMatch::Table, GameMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_user_id")
                            .from(Lineup::Table, Lineup::UserId)
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
                    .name("idx_lineup_match_user")
                    .table(Lineup::Table)
                    .col(Lineup::MatchId)
                    .col(Lineup::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lineup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lineup {
    Table,
    Id,
    MatchId,
    UserId,
    Side,
}
