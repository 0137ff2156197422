//! Chat messages and their fan-out to connected sockets.

use sea_orm::DatabaseConnection;

use crate::server::{
    channel::{send_json, ChannelLayer},
    data::{chat::ChatRepository, message::MessageRepository},
    error::{auth::AuthError, channel::ChannelError, AppError},
    model::{
        chat::{chat_group, Chat},
        message::{CreateMessageParam, Message},
    },
};

/// Broadcasts a stored message to its chat group as a `message` event.
///
/// # Arguments
/// - `layer` - Channel layer the chat's sockets subscribe through
/// - `message` - The persisted message
///
/// # Returns
/// - `Ok(())` - Event handed to the layer
/// - `Err(ChannelError)` - Encoding failed or the backend rejected the event
pub async fn publish(layer: &dyn ChannelLayer, message: &Message) -> Result<(), ChannelError> {
    let group = chat_group(message.chat_id);
    send_json(layer, &group, &message.clone().into_event()).await
}

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a chat's messages in send order.
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages by ascending `sent_at`
    /// - `Err(AppError::NotFound)` - Unknown chat or the caller is not a participant
    pub async fn get_by_chat(&self, caller_id: i32, chat_id: i32) -> Result<Vec<Message>, AppError> {
        self.participant_chat(caller_id, chat_id).await?;

        Ok(MessageRepository::new(self.db).get_by_chat(chat_id).await?)
    }

    /// Stores a message from the caller in one of their chats.
    ///
    /// # Arguments
    /// - `caller_id` - The sender
    /// - `chat_id` - Target chat
    /// - `content` - Message text
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::NotFound)` - Unknown chat or the caller is not a participant
    /// - `Err(AppError::BadRequest)` - Blank content
    pub async fn create(
        &self,
        caller_id: i32,
        chat_id: i32,
        content: String,
    ) -> Result<Message, AppError> {
        self.participant_chat(caller_id, chat_id).await?;
        let param = CreateMessageParam::new(chat_id, caller_id, content)?;

        Ok(MessageRepository::new(self.db).create(param).await?)
    }

    /// Stores a message and broadcasts it to the chat group.
    ///
    /// A failed broadcast is logged; the message stays stored and is still returned.
    pub async fn send(
        &self,
        caller_id: i32,
        chat_id: i32,
        content: String,
        layer: &dyn ChannelLayer,
    ) -> Result<Message, AppError> {
        let message = self.create(caller_id, chat_id, content).await?;

        if let Err(e) = publish(layer, &message).await {
            tracing::warn!(
                "Failed to broadcast message {} to chat {}: {}",
                message.id,
                chat_id,
                e
            );
        }

        Ok(message)
    }

    /// Gets a message of a chat the caller participates in
    pub async fn get(&self, caller_id: i32, message_id: i32) -> Result<Message, AppError> {
        let Some(message) = MessageRepository::new(self.db)
            .find_by_id(message_id)
            .await?
        else {
            return Err(AppError::NotFound("Message not found".to_string()));
        };

        match self.participant_chat(caller_id, message.chat_id).await {
            Ok(_) => Ok(message),
            Err(AppError::NotFound(_)) => Err(AppError::NotFound("Message not found".to_string())),
            Err(e) => Err(e),
        }
    }

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(())` - Message deleted
    /// - `Err(AppError::NotFound)` - Not visible to the caller
    /// - `Err(AuthError::AccessDenied)` - The caller participates but did not send it
    pub async fn delete(&self, caller_id: i32, message_id: i32) -> Result<(), AppError> {
        let message = self.get(caller_id, message_id).await?;
        if message.sender.id != caller_id {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("message {} was sent by another user", message_id),
            )
            .into());
        }

        MessageRepository::new(self.db).delete(message_id).await?;

        Ok(())
    }

    /// Loads a chat if the user is one of its match participants.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The chat
    /// - `Err(AppError::NotFound)` - Unknown chat or not a participant
    pub async fn participant_chat(&self, user_id: i32, chat_id: i32) -> Result<Chat, AppError> {
        ChatRepository::new(self.db)
            .find_by_id(chat_id)
            .await?
            .filter(|chat| chat.user_match.includes(user_id))
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }
}
