use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub chat: i32,
    pub sender: UserSummaryDto,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMessageDto {
    pub content: String,
}

/// Message body as broadcast to chat group members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessagePayloadDto {
    pub id: i32,
    pub chat_id: i32,
    pub sender: UserSummaryDto,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Event pushed to every socket in a chat group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChatEventDto {
    Message(MessagePayloadDto),
}

/// Frame sent by a WebSocket client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatCommandDto {
    Message {
        #[serde(default)]
        text: String,
    },
}

/// Error frame sent back to a single WebSocket client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketErrorDto {
    pub error: String,
    pub detail: String,
}
