//! Real-time chat socket.
//!
//! A socket authenticates with the `token` query parameter, joins the chat's group on the
//! channel layer and then relays in both directions: group events go out to the client,
//! client `message` frames are stored and published to the group. Rejected connections
//! are upgraded and immediately closed with an application close code.

use axum::{
    extract::{
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;

use crate::{
    model::message::{ChatCommandDto, SocketErrorDto},
    server::{
        channel::GroupSubscription,
        error::AppError,
        middleware::auth::{authenticate_token, AuthenticatedUser},
        model::chat::chat_group,
        service::message::{publish, MessageService},
        state::AppState,
    },
};

/// No token in the query string.
pub const CLOSE_NO_TOKEN: u16 = 4001;
/// Token rejected.
pub const CLOSE_UNAUTHORIZED: u16 = 4003;
/// Unknown chat or the caller is not a participant.
pub const CLOSE_NOT_FOUND: u16 = 4004;
/// Server-side failure while joining.
pub const CLOSE_INTERNAL: u16 = 1011;

#[derive(Debug, Deserialize)]
pub struct SocketQuery {
    pub token: Option<String>,
}

/// Upgrade a connection to the chat socket of `chat_id`.
///
/// # Arguments
/// - `state` - Application state with the database and channel layer
/// - `chat_id` - Chat to join
/// - `query` - `token` query parameter carrying an API token or Auth0 JWT
/// - `ws` - Upgrade request
///
/// # Returns
/// - `101 Switching Protocols` - Always; rejected sockets are closed with code 4001, 4003,
///   4004 or 1011 right after the upgrade
pub async fn chat_socket(
    State(state): State<AppState>,
    Path(chat_id): Path<i32>,
    Query(query): Query<SocketQuery>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(state, chat_id, query.token, socket))
}

async fn handle_socket(state: AppState, chat_id: i32, token: Option<String>, mut socket: WebSocket) {
    let (caller, mut subscription) = match join(&state, chat_id, token.as_deref()).await {
        Ok(joined) => joined,
        Err(code) => {
            tracing::debug!("Rejected socket for chat {} with close code {}", chat_id, code);
            let frame = CloseFrame {
                code,
                reason: "".into(),
            };
            let _ = socket.send(Message::Close(Some(frame))).await;
            return;
        }
    };

    tracing::debug!("User {} joined {}", caller.id(), subscription.group());

    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            payload = subscription.recv() => {
                let Some(payload) = payload else {
                    break;
                };
                if sender.send(Message::Text(payload.into())).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let Some(reply) = handle_frame(&state, caller.id(), chat_id, text.as_str()).await else {
                        continue;
                    };
                    if sender.send(Message::Text(reply.into())).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("Socket error in chat {}: {}", chat_id, e);
                    break;
                }
            }
        }
    }

    tracing::debug!("User {} left {}", caller.id(), subscription.group());
    state.channel.group_discard(subscription).await;
}

/// Authenticates the caller and subscribes to the chat group.
///
/// # Returns
/// - `Ok((AuthenticatedUser, GroupSubscription))` - The caller and its group membership
/// - `Err(u16)` - Close code to reject the socket with
async fn join(
    state: &AppState,
    chat_id: i32,
    token: Option<&str>,
) -> Result<(AuthenticatedUser, GroupSubscription), u16> {
    let Some(token) = token.map(str::trim).filter(|token| !token.is_empty()) else {
        return Err(CLOSE_NO_TOKEN);
    };

    let caller = authenticate_token(state, token)
        .await
        .map_err(|e| rejection_code(&e))?;

    MessageService::new(&state.db)
        .participant_chat(caller.id(), chat_id)
        .await
        .map_err(|e| rejection_code(&e))?;

    let subscription = state
        .channel
        .group_add(&chat_group(chat_id))
        .await
        .map_err(|e| {
            tracing::error!("Failed to join chat {}: {}", chat_id, e);
            CLOSE_INTERNAL
        })?;

    Ok((caller, subscription))
}

/// Maps an error raised while joining to a close code.
pub fn rejection_code(error: &AppError) -> u16 {
    match error {
        AppError::AuthErr(_) => CLOSE_UNAUTHORIZED,
        AppError::NotFound(_) => CLOSE_NOT_FOUND,
        e => {
            tracing::error!("Failed to accept socket: {}", e);
            CLOSE_INTERNAL
        }
    }
}

/// Handles one text frame from the client.
///
/// # Returns
/// - `Some(String)` - Error frame to send back to this client only
/// - `None` - Nothing to reply; either the message was published or the frame was ignored
pub async fn handle_frame(state: &AppState, caller_id: i32, chat_id: i32, frame: &str) -> Option<String> {
    let command = match serde_json::from_str::<ChatCommandDto>(frame) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!("Ignoring frame in chat {}: {}", chat_id, e);
            return None;
        }
    };

    let ChatCommandDto::Message { text } = command;

    let message = match MessageService::new(&state.db)
        .create(caller_id, chat_id, text)
        .await
    {
        Ok(message) => message,
        Err(AppError::BadRequest(detail)) => return error_frame("bad_request", detail),
        Err(e) => {
            tracing::error!("Failed to store message in chat {}: {}", chat_id, e);
            return error_frame("server_error", "Could not save the message".to_string());
        }
    };

    if let Err(e) = publish(state.channel.as_ref(), &message).await {
        tracing::error!("Failed to publish message {}: {}", message.id, e);
        return error_frame("server_error", "Could not deliver the message".to_string());
    }

    None
}

fn error_frame(error: &str, detail: String) -> Option<String> {
    serde_json::to_string(&SocketErrorDto {
        error: error.to_string(),
        detail,
    })
    .ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::server::{
        channel::{ChannelLayer, InMemoryChannelLayer},
        error::auth::AuthError,
    };
    use test_utils::{builder::TestBuilder, factory};

    fn state(db: &sea_orm::DatabaseConnection, layer: Arc<InMemoryChannelLayer>) -> AppState {
        AppState::new(
            db.clone(),
            reqwest::Client::new(),
            layer,
            Arc::new(Vec::new()),
            None,
            365,
        )
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(
            rejection_code(&AuthError::InvalidToken.into()),
            CLOSE_UNAUTHORIZED
        );
        assert_eq!(
            rejection_code(&AppError::NotFound("Chat not found".to_string())),
            CLOSE_NOT_FOUND
        );
        assert_eq!(
            rejection_code(&AppError::InternalError("boom".to_string())),
            CLOSE_INTERNAL
        );
    }

    #[tokio::test]
    async fn test_join_rejects_missing_token_and_outsiders() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_alice, _bob, _, chat) = factory::helpers::create_match_with_chat(db).await.unwrap();
        let state = state(db, Arc::new(InMemoryChannelLayer::new()));

        assert_eq!(join(&state, chat.id, None).await.unwrap_err(), CLOSE_NO_TOKEN);
        assert_eq!(join(&state, chat.id, Some("  ")).await.unwrap_err(), CLOSE_NO_TOKEN);
        assert_eq!(
            join(&state, chat.id, Some("not-a-token")).await.unwrap_err(),
            CLOSE_UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_message_frame_is_stored_and_published() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, _, chat) = factory::helpers::create_match_with_chat(db).await.unwrap();
        let layer = Arc::new(InMemoryChannelLayer::new());
        let mut subscription = layer.group_add(&chat_group(chat.id)).await.unwrap();
        let state = state(db, layer);

        let reply = handle_frame(&state, alice.id, chat.id, r#"{"type":"message","text":"Hi there"}"#).await;
        assert!(reply.is_none());

        let event: serde_json::Value =
            serde_json::from_str(&subscription.recv().await.unwrap()).unwrap();
        assert_eq!(event["type"], "message");
        assert_eq!(event["data"]["content"], "Hi there");
        assert_eq!(event["data"]["sender"]["id"], alice.id);

        let stored = MessageService::new(db)
            .get_by_chat(alice.id, chat.id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_and_garbage_frames() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, _, chat) = factory::helpers::create_match_with_chat(db).await.unwrap();
        let state = state(db, Arc::new(InMemoryChannelLayer::new()));

        let reply = handle_frame(&state, alice.id, chat.id, r#"{"type":"message","text":"  "}"#)
            .await
            .unwrap();
        let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(reply["error"], "bad_request");

        assert!(handle_frame(&state, alice.id, chat.id, "not json").await.is_none());
        assert!(handle_frame(&state, alice.id, chat.id, r#"{"type":"typing"}"#)
            .await
            .is_none());
    }
}
