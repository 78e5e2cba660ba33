use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

/// Creates both user-submitted report tables: free-form feedback and bug reports.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer_null(Feedback::UserId))
                    .col(text(Feedback::Content))
                    .col(
                        timestamp(Feedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_user_id")
                            .from(Feedback::Table, Feedback::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BugReport::Table)
                    .if_not_exists()
                    .col(pk_auto(BugReport::Id))
                    .col(integer(BugReport::UserId))
                    .col(string(BugReport::Title))
                    .col(text(BugReport::Description))
                    .col(string_null(BugReport::PageUrl))
                    .col(boolean(BugReport::IsResolved).default(false))
                    .col(
                        timestamp(BugReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_report_user_id")
                            .from(BugReport::Table, BugReport::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BugReport::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    UserId,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum BugReport {
    Table,
    Id,
    UserId,
    Title,
    Description,
    PageUrl,
    IsResolved,
    CreatedAt,
}
