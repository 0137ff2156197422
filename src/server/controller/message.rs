use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{CreateMessageDto, MessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// List a chat's messages, oldest first.
#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/messages/",
    tag = MESSAGE_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    responses(
        (status = 200, description = "Messages of the chat", body = Vec<MessageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let messages = MessageService::new(&state.db)
        .get_by_chat(caller.id(), chat_id)
        .await?;
    let messages: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// Send a message to a chat.
///
/// The stored message is also pushed to every socket connected to the chat. A failed
/// push is logged and does not fail the request.
///
/// # Arguments
/// - `state` - Application state with the database and channel layer
/// - `headers` - Request headers carrying the bearer token
/// - `chat_id` - ID of the chat
/// - `payload` - Message content
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Blank content
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Not one of the caller's chats
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/messages/",
    tag = MESSAGE_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Blank content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
    payload: Result<Json<CreateMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let message = MessageService::new(&state.db)
        .send(caller.id(), chat_id, payload.content, state.channel.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get a message of one of the caller's chats.
#[utoipa::path(
    get,
    path = "/api/messages/{message_id}/",
    tag = MESSAGE_TAG,
    params(("message_id" = i32, Path, description = "ID of the message")),
    responses(
        (status = 200, description = "The message", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let message = MessageService::new(&state.db)
        .get(caller.id(), message_id)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Delete a message the caller sent.
///
/// # Access Control
/// - Participants may see every message of their chats, but only the sender may delete one
#[utoipa::path(
    delete,
    path = "/api/messages/{message_id}/",
    tag = MESSAGE_TAG,
    params(("message_id" = i32, Path, description = "ID of the message")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Sent by another user", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    MessageService::new(&state.db)
        .delete(caller.id(), message_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
