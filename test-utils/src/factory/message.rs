//! Message factory for creating chat messages.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a message with generated content sent now.
///
/// # Arguments
/// - `db` - Database connection
/// - `chat_id` - ID of the chat
/// - `sender_id` - ID of the sending user
///
/// # Returns
/// - `Ok(entity::message::Model)` - Created message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: i32,
    sender_id: i32,
) -> Result<entity::message::Model, DbErr> {
    create_message_at(db, chat_id, sender_id, format!("Message {}", next_id()), Utc::now()).await
}

/// Creates a message with explicit content and send time.
pub async fn create_message_at(
    db: &DatabaseConnection,
    chat_id: i32,
    sender_id: i32,
    content: impl Into<String>,
    sent_at: DateTime<Utc>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        chat_id: ActiveValue::Set(chat_id),
        sender_id: ActiveValue::Set(sender_id),
        content: ActiveValue::Set(content.into()),
        sent_at: ActiveValue::Set(sent_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
