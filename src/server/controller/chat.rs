use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatDto, CreateChatDto, UpdateChatDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// List chats of the caller's matches, newest first.
#[utoipa::path(
    get,
    path = "/api/chats/",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Caller's chats", body = Vec<ChatDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let chats = ChatService::new(&state.db).get_all(caller.id()).await?;
    let chats: Vec<ChatDto> = chats.into_iter().map(|chat| chat.into_dto()).collect();

    Ok((StatusCode::OK, Json(chats)))
}

/// Open the chat of one of the caller's matches.
///
/// # Returns
/// - `201 Created` - The new chat
/// - `400 Bad Request` - Not the caller's match, or the match already has a chat
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/chats/",
    tag = CHAT_TAG,
    request_body = CreateChatDto,
    responses(
        (status = 201, description = "Chat created", body = ChatDto),
        (status = 400, description = "Invalid chat", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateChatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let chat = ChatService::new(&state.db)
        .create(caller.id(), payload.match_id, payload.status.map(Into::into))
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into_dto())))
}

/// Get a chat the caller participates in.
#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/",
    tag = CHAT_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    responses(
        (status = 200, description = "The chat", body = ChatDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let chat = ChatService::new(&state.db).get(caller.id(), chat_id).await?;

    Ok((StatusCode::OK, Json(chat.into_dto())))
}

/// Change the status of a chat. Serves `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/api/chats/{chat_id}/",
    tag = CHAT_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    request_body = UpdateChatDto,
    responses(
        (status = 200, description = "Updated chat", body = ChatDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
    payload: Result<Json<UpdateChatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let chat = ChatService::new(&state.db)
        .update(caller.id(), chat_id, payload.status.map(Into::into))
        .await?;

    Ok((StatusCode::OK, Json(chat.into_dto())))
}

/// Delete a chat and its messages.
#[utoipa::path(
    delete,
    path = "/api/chats/{chat_id}/",
    tag = CHAT_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    responses(
        (status = 204, description = "Chat deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    ChatService::new(&state.db).delete(caller.id(), chat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
