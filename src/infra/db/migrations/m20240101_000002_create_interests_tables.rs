//! Migration: Create the interest vocabulary and membership tables.

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
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Interests::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Membership is a plain many-to-many link; the composite primary
        // key enforces unique membership per (user, interest) pair.
        manager
            .create_table(
                Table::create()
                    .table(UserInterests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserInterests::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserInterests::InterestId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserInterests::UserId)
                            .col(UserInterests::InterestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interests_user")
                            .from(UserInterests::Table, UserInterests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interests_interest")
                            .from(UserInterests::Table, UserInterests::InterestId)
                            .to(Interests::Table, Interests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInterests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Interests {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub enum UserInterests {
    Table,
    UserId,
    InterestId,
}
