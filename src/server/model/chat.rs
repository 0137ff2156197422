//! Chat domain models.

use chrono::{DateTime, Utc};
use entity::status::ChatStatus;

use crate::{model::chat::ChatDto, server::model::user_match::MatchRef};

/// Group name used by the channel layer for a chat.
pub fn chat_group(chat_id: i32) -> String {
    format!("chat_{}", chat_id)
}

/// The conversation attached to a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub user_match: MatchRef,
    pub status: ChatStatus,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            user_match: self.user_match.into_dto(),
            status: self.status.into(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::chat::Model, user_match: MatchRef) -> Self {
        Self {
            id: entity.id,
            user_match,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}
