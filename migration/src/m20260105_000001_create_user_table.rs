use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::ProviderId))
                    .col(string(User::Name))
                    .col(string_null(User::Email))
                    .col(string_null(User::Image))
                    .col(string_len_null(User::Nickname, 20).unique_key())
                    .col(string_len_null(User::Position, 16))
                    .col(string_null(User::Region))
                    .col(boolean(User::IsOnboarded).default(false))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    ProviderId,
    Name,
    Email,
    Image,
    Nickname,
    Position,
    Region,
    IsOnboarded,
    IsAdmin,
    CreatedAt,
}
