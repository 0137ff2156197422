use entity::status::ChatStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat::ChatRepository, user_match::MatchRepository},
    error::AppError,
    model::chat::Chat,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists chats of the caller's matches, newest first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Chat>, AppError> {
        Ok(ChatRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Opens the chat of one of the caller's matches.
    ///
    /// Matches normally receive their chat on creation; this covers a chat that was
    /// deleted afterwards.
    ///
    /// # Arguments
    /// - `caller_id` - The requesting user
    /// - `match_id` - Match the chat belongs to
    /// - `status` - Initial status, active when omitted
    ///
    /// # Returns
    /// - `Ok(Chat)` - The new chat
    /// - `Err(AppError::BadRequest)` - Not the caller's match, or the match already has a chat
    pub async fn create(
        &self,
        caller_id: i32,
        match_id: i32,
        status: Option<ChatStatus>,
    ) -> Result<Chat, AppError> {
        let Some(match_ref) = MatchRepository::new(self.db)
            .find_ref(match_id)
            .await?
            .filter(|match_ref| match_ref.includes(caller_id))
        else {
            return Err(AppError::BadRequest(
                "match_id: not one of your matches".to_string(),
            ));
        };

        let repo = ChatRepository::new(self.db);
        if repo.exists_for_match(match_id).await? {
            return Err(AppError::BadRequest(
                "match_id: this match already has a chat".to_string(),
            ));
        }

        Ok(repo
            .create(match_ref, status.unwrap_or(ChatStatus::Active))
            .await?)
    }

    /// Gets a chat the caller participates in. Other chats are reported as missing.
    pub async fn get(&self, caller_id: i32, chat_id: i32) -> Result<Chat, AppError> {
        ChatRepository::new(self.db)
            .find_by_id(chat_id)
            .await?
            .filter(|chat| chat.user_match.includes(caller_id))
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }

    /// Changes the status of a chat; an empty update returns the chat unchanged
    pub async fn update(
        &self,
        caller_id: i32,
        chat_id: i32,
        status: Option<ChatStatus>,
    ) -> Result<Chat, AppError> {
        let chat = self.get(caller_id, chat_id).await?;
        let Some(status) = status else {
            return Ok(chat);
        };

        ChatRepository::new(self.db)
            .update_status(chat_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }

    /// Deletes a chat with its messages
    pub async fn delete(&self, caller_id: i32, chat_id: i32) -> Result<(), AppError> {
        self.get(caller_id, chat_id).await?;
        ChatRepository::new(self.db).delete(chat_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn test_create_rejects_foreign_match_and_existing_chat() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let alice = factory::create_user(db).await.unwrap();
        let bob = factory::create_user(db).await.unwrap();
        let carol = factory::create_user(db).await.unwrap();
        let user_match = factory::create_match(db, alice.id, bob.id).await.unwrap();

        let service = ChatService::new(db);

        assert!(matches!(
            service.create(carol.id, user_match.id, None).await,
            Err(AppError::BadRequest(_))
        ));

        let chat = service
            .create(bob.id, user_match.id, Some(ChatStatus::Closed))
            .await
            .unwrap();
        assert_eq!(chat.status, ChatStatus::Closed);
        assert_eq!(chat.user_match.id, user_match.id);

        assert!(matches!(
            service.create(alice.id, user_match.id, None).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_chats_are_scoped_to_participants() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, _, chat) = factory::helpers::create_match_with_chat(db).await.unwrap();
        let carol = factory::create_user(db).await.unwrap();

        let service = ChatService::new(db);

        assert_eq!(service.get_all(alice.id).await.unwrap().len(), 1);
        assert!(service.get_all(carol.id).await.unwrap().is_empty());
        assert!(matches!(
            service.get(carol.id, chat.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update(carol.id, chat.id, Some(ChatStatus::Closed)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, bob, _, chat) = factory::helpers::create_match_with_chat(db).await.unwrap();
        factory::create_message(db, chat.id, bob.id).await.unwrap();

        let service = ChatService::new(db);

        let closed = service
            .update(alice.id, chat.id, Some(ChatStatus::Closed))
            .await
            .unwrap();
        assert_eq!(closed.status, ChatStatus::Closed);

        let unchanged = service.update(alice.id, chat.id, None).await.unwrap();
        assert_eq!(unchanged.status, ChatStatus::Closed);

        service.delete(bob.id, chat.id).await.unwrap();
        assert!(matches!(
            service.get(alice.id, chat.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
