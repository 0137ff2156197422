//! Chat factory for creating the conversation attached to a match.

use chrono::Utc;
use entity::status::ChatStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active chat for the given match.
///
/// # Arguments
/// - `db` - Database connection
/// - `match_id` - ID of the match the chat belongs to
///
/// # Returns
/// - `Ok(entity::chat::Model)` - Created chat entity
/// - `Err(DbErr)` - Database error during insert, including a second chat for one match
pub async fn create_chat(
    db: &DatabaseConnection,
    match_id: i32,
) -> Result<entity::chat::Model, DbErr> {
    create_chat_with_status(db, match_id, ChatStatus::Active).await
}

/// Creates a chat with an explicit status.
pub async fn create_chat_with_status(
    db: &DatabaseConnection,
    match_id: i32,
    status: ChatStatus,
) -> Result<entity::chat::Model, DbErr> {
    entity::chat::ActiveModel {
        match_id: ActiveValue::Set(match_id),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
