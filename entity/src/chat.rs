use sea_orm::entity::prelude::*;

use crate::status::ChatStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub match_id: i32,
    pub status: ChatStatus,
    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
}

impl Related<super::user_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMatch.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
