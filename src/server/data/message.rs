//! Chat message repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    message::{CreateMessageParam, Message},
    user::UserSummary,
};

/// Repository providing database operations for chat messages.
pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `MessageRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a message sent now.
    ///
    /// # Arguments
    /// - `param` - Chat, sender and non-blank content
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its sender summary
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            sender_id: ActiveValue::Set(param.sender_id),
            content: ActiveValue::Set(param.content),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("sender of message {}", entity.id)))
    }

    /// Finds a message by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - Message found
    /// - `Ok(None)` - No message with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, message_id: i32) -> Result<Option<Message>, DbErr> {
        let row = entity::prelude::Message::find_by_id(message_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(into_message))
    }

    /// Lists a chat's messages in send order.
    pub async fn get_by_chat(&self, chat_id: i32) -> Result<Vec<Message>, DbErr> {
        let rows = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::message::Column::SentAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(into_message).collect())
    }

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(true)` - Message deleted
    /// - `Ok(false)` - No message with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, message_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_by_id(message_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_message(
    (message, sender): (entity::message::Model, Option<entity::user::Model>),
) -> Option<Message> {
    let sender = UserSummary::from_entity(&sender?);
    Some(Message::from_entity(message, sender))
}
