use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer(Matches::User1Id))
                    .col(integer(Matches::User2Id))
                    .col(string_len(Matches::StatusUser1, 20).default("pending"))
                    .col(string_len(Matches::StatusUser2, 20).default("pending"))
                    .col(timestamp_with_time_zone_null(Matches::MatchedAt))
                    .col(integer_null(Matches::User1Rating))
                    .col(integer_null(Matches::User2Rating))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_user1_id")
                            .from(Matches::Table, Matches::User1Id)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_user2_id")
                            .from(Matches::Table, Matches::User2Id)
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
                    .name("idx_matches_matched_at")
                    .table(Matches::Table)
                    .col(Matches::MatchedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    User1Id,
    User2Id,
    StatusUser1,
    StatusUser2,
    MatchedAt,
    User1Rating,
    User2Rating,
}
