use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000008_create_match_table::Matches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quests::Table)
                    .if_not_exists()
                    .col(pk_auto(Quests::Id))
                    .col(integer(Quests::MatchId))
                    .col(string(Quests::LocationName))
                    .col(text(Quests::HintUser1).default(""))
                    .col(text(Quests::HintUser2).default(""))
                    .col(string_len(Quests::Activity, 100).default(""))
                    .col(date(Quests::QuestDate))
                    .col(double_null(Quests::LocationLatitude))
                    .col(double_null(Quests::LocationLongitude))
                    .col(string_len(Quests::StatusUser1, 20).default("pending"))
                    .col(string_len(Quests::StatusUser2, 20).default("pending"))
                    .col(integer_null(Quests::XpReward))
                    .col(boolean(Quests::XpAwarded).default(false))
                    .col(
                        timestamp_with_time_zone(Quests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Quests::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quests_match_id")
                            .from(Quests::Table, Quests::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quests_match_location")
                    .table(Quests::Table)
                    .col(Quests::MatchId)
                    .col(Quests::LocationName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quests_quest_date")
                    .table(Quests::Table)
                    .col(Quests::QuestDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quests {
    Table,
    Id,
    MatchId,
    LocationName,
    HintUser1,
    HintUser2,
    Activity,
    QuestDate,
    LocationLatitude,
    LocationLongitude,
    StatusUser1,
    StatusUser2,
    XpReward,
    XpAwarded,
    CreatedAt,
    UpdatedAt,
}
