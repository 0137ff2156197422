//! Chat repository.

use chrono::Utc;
use entity::status::ChatStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user_match::participant,
    model::{chat::Chat, user_match::MatchRef},
};

pub struct ChatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the chat of a match.
    ///
    /// # Arguments
    /// - `user_match` - Match the chat belongs to
    /// - `status` - Initial status
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat
    /// - `Err(DbErr)` - Database error, including an existing chat for the match
    pub async fn create(&self, user_match: MatchRef, status: ChatStatus) -> Result<Chat, DbErr> {
        let entity = entity::chat::ActiveModel {
            match_id: ActiveValue::Set(user_match.id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chat::from_entity(entity, user_match))
    }

    /// Finds a chat by ID together with its match.
    ///
    /// # Returns
    /// - `Ok(Some(Chat))` - Chat found
    /// - `Ok(None)` - No chat with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, chat_id: i32) -> Result<Option<Chat>, DbErr> {
        let row = entity::prelude::Chat::find_by_id(chat_id)
            .find_also_related(entity::prelude::UserMatch)
            .one(self.db)
            .await?;

        Ok(row.and_then(into_chat))
    }

    pub async fn exists_for_match(&self, match_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Chat::find()
            .filter(entity::chat::Column::MatchId.eq(match_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists chats of the user's matches, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Chat>, DbErr> {
        let rows = entity::prelude::Chat::find()
            .find_also_related(entity::prelude::UserMatch)
            .filter(participant(user_id))
            .order_by_desc(entity::chat::Column::CreatedAt)
            .order_by_desc(entity::chat::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(into_chat).collect())
    }

    /// Changes the status of a chat.
    ///
    /// # Returns
    /// - `Ok(Some(Chat))` - The updated chat
    /// - `Ok(None)` - No chat with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, chat_id: i32, status: ChatStatus) -> Result<Option<Chat>, DbErr> {
        let Some(entity) = entity::prelude::Chat::find_by_id(chat_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::chat::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await?;

        self.find_by_id(chat_id).await
    }

    /// Deletes a chat and its messages.
    ///
    /// # Returns
    /// - `Ok(true)` - Chat deleted
    /// - `Ok(false)` - No chat with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, chat_id: i32) -> Result<bool, DbErr> {
        entity::prelude::Message::delete_many()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Chat::delete_by_id(chat_id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_chat(
    (chat, user_match): (entity::chat::Model, Option<entity::user_match::Model>),
) -> Option<Chat> {
    let user_match = MatchRef::from_entity(&user_match?);
    Some(Chat::from_entity(chat, user_match))
}
