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
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(integer(UserProfile::UserId).primary_key())
                    .col(string(UserProfile::FullName).default(""))
                    .col(date_null(UserProfile::DateOfBirth))
                    .col(string(UserProfile::Nickname).default(""))
                    .col(string(UserProfile::TeaserDescription).default(""))
                    .col(string(UserProfile::ProfilePhotoUrl).default(""))
                    .col(string(UserProfile::VerificationVideoUrl).default(""))
                    .col(boolean(UserProfile::IsVerified).default(false))
                    .col(integer(UserProfile::TotalXp).default(0))
                    .col(boolean(UserProfile::IsMatched).default(false))
                    .col(double_null(UserProfile::HomeLatitude))
                    .col(double_null(UserProfile::HomeLongitude))
                    .col(string(UserProfile::ExternalId).default(""))
                    .col(boolean(UserProfile::IsServiceAccount).default(false))
                    .col(
                        timestamp_with_time_zone(UserProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(UserProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user_id")
                            .from(UserProfile::Table, UserProfile::UserId)
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
                    .name("idx_user_profile_external_id")
                    .table(UserProfile::Table)
                    .col(UserProfile::ExternalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_profile_is_service_account")
                    .table(UserProfile::Table)
                    .col(UserProfile::IsServiceAccount)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    UserId,
    FullName,
    DateOfBirth,
    Nickname,
    TeaserDescription,
    ProfilePhotoUrl,
    VerificationVideoUrl,
    IsVerified,
    TotalXp,
    IsMatched,
    HomeLatitude,
    HomeLongitude,
    ExternalId,
    IsServiceAccount,
    CreatedAt,
    UpdatedAt,
}
