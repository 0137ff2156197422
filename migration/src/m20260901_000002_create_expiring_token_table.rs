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
                    .table(ExpiringToken::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpiringToken::Id))
                    .col(integer(ExpiringToken::UserId))
                    .col(string_len(ExpiringToken::KeyHash, 64).unique_key())
                    .col(string_len(ExpiringToken::Name, 100).default(""))
                    .col(
                        timestamp_with_time_zone(ExpiringToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone(ExpiringToken::ExpiresAt))
                    .col(boolean(ExpiringToken::Revoked).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expiring_token_user_id")
                            .from(ExpiringToken::Table, ExpiringToken::UserId)
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
                    .name("idx_expiring_token_expires_at")
                    .table(ExpiringToken::Table)
                    .col(ExpiringToken::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExpiringToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExpiringToken {
    Table,
    Id,
    UserId,
    KeyHash,
    Name,
    CreatedAt,
    ExpiresAt,
    Revoked,
}
