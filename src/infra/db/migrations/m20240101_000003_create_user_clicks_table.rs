//! Migration: Create the user_clicks event log table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserClicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserClicks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserClicks::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserClicks::ArticleTitle)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserClicks::ArticleUrl).text().not_null())
                    .col(
                        ColumnDef::new(UserClicks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_clicks_user")
                            .from(UserClicks::Table, UserClicks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History retrieval filters by user and orders by time
        manager
            .create_index(
                Index::create()
                    .name("idx_user_clicks_user_created")
                    .table(UserClicks::Table)
                    .col(UserClicks::UserId)
                    .col(UserClicks::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_clicks_user_created")
                    .table(UserClicks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserClicks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserClicks {
    Table,
    Id,
    UserId,
    ArticleTitle,
    ArticleUrl,
    CreatedAt,
}
