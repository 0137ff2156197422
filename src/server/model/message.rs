//! Chat message domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::message::{ChatEventDto, MessageDto, MessagePayloadDto},
    server::{error::AppError, model::user::UserSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    pub sender: UserSummary,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            chat: self.chat_id,
            sender: self.sender.into_dto(),
            content: self.content,
            sent_at: self.sent_at,
        }
    }

    /// Builds the event broadcast to the chat group when this message is sent.
    pub fn into_event(self) -> ChatEventDto {
        ChatEventDto::Message(MessagePayloadDto {
            id: self.id,
            chat_id: self.chat_id,
            sender: self.sender.into_dto(),
            content: self.content,
            sent_at: self.sent_at,
        })
    }

    pub fn from_entity(entity: entity::message::Model, sender: UserSummary) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            sender,
            content: entity.content,
            sent_at: entity.sent_at,
        }
    }
}

/// Parameters for sending a message.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMessageParam {
    pub chat_id: i32,
    pub sender_id: i32,
    pub content: String,
}

impl CreateMessageParam {
    /// Validates message content.
    ///
    /// # Returns
    /// - `Ok(CreateMessageParam)` - Content is not blank
    /// - `Err(AppError::BadRequest)` - Content is blank
    pub fn new(chat_id: i32, sender_id: i32, content: String) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "content: this field may not be blank".to_string(),
            ));
        }

        Ok(Self {
            chat_id,
            sender_id,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialises_with_type_tag() {
        let sent_at = Utc::now();
        let message = Message {
            id: 7,
            chat_id: 3,
            sender: UserSummary {
                id: 1,
                email: Some("a@example.com".to_string()),
            },
            content: "hi".to_string(),
            sent_at,
        };

        let value = serde_json::to_value(message.into_event()).unwrap();

        assert_eq!(value["type"], "message");
        assert_eq!(value["data"]["id"], 7);
        assert_eq!(value["data"]["chat_id"], 3);
        assert_eq!(value["data"]["sender"]["email"], "a@example.com");
        assert_eq!(value["data"]["content"], "hi");
    }

    #[test]
    fn test_rejects_blank_content() {
        assert!(CreateMessageParam::new(1, 1, " \n".to_string()).is_err());
        assert!(CreateMessageParam::new(1, 1, "hey".to_string()).is_ok());
    }
}
