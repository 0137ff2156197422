use sea_orm::entity::prelude::*;

use crate::status::ProgressStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub location_name: String,
    pub hint_user1: String,
    pub hint_user2: String,
    pub activity: String,
    #[sea_orm(indexed)]
    pub quest_date: Date,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub status_user1: ProgressStatus,
    pub status_user2: ProgressStatus,
    pub xp_reward: Option<i32>,
    pub xp_awarded: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_match::Entity",
        from = "Column::MatchId",
        to = "super::user_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserMatch,
}

impl Related<super::user_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
