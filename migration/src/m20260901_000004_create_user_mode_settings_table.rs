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
                    .table(UserModeSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(UserModeSettings::Id))
                    .col(integer(UserModeSettings::UserId).unique_key())
                    .col(boolean(UserModeSettings::GhostModeEnabled).default(false))
                    .col(boolean(UserModeSettings::DailyRemindersEnabled).default(true))
                    .col(boolean(UserModeSettings::LocationSharingEnabled).default(true))
                    .col(boolean(UserModeSettings::SpotmatchNotificationsEnabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_mode_settings_user_id")
                            .from(UserModeSettings::Table, UserModeSettings::UserId)
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
            .drop_table(Table::drop().table(UserModeSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserModeSettings {
    Table,
    Id,
    UserId,
    GhostModeEnabled,
    DailyRemindersEnabled,
    LocationSharingEnabled,
    SpotmatchNotificationsEnabled,
}
