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
                    .col(string_null(User::Email).unique_key())
                    .col(string_len_null(User::PhoneNumber, 20).unique_key())
                    .col(string(User::Username).unique_key())
                    .col(string(User::PasswordHash))
                    .col(string(User::FirstName).default(""))
                    .col(string(User::LastName).default(""))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_len(User::Provider, 50).default(""))
                    .col(string(User::ProviderId).default(""))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
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
    Email,
    PhoneNumber,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    IsActive,
    Provider,
    ProviderId,
    CreatedAt,
    UpdatedAt,
}
