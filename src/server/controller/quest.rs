use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        quest::{CreateQuestDto, HintDto, QuestDto, UpdateQuestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::quest::{CreateQuestParam, UpdateQuestParam},
        service::quest::QuestService,
        state::AppState,
    },
};

/// Tag for grouping quest endpoints in OpenAPI documentation
pub static QUEST_TAG: &str = "quest";

/// List quests of the caller's matches, latest quest date first.
#[utoipa::path(
    get,
    path = "/api/quests/",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "Caller's quests", body = Vec<QuestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_quests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let quests = QuestService::new(&state.db).get_all(caller.id()).await?;
    let quests: Vec<QuestDto> = quests.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(quests)))
}

/// Create a quest on one of the caller's matches.
///
/// # Returns
/// - `201 Created` - The new quest
/// - `400 Bad Request` - Not the caller's match, duplicate location or blank activity
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/quests/",
    tag = QUEST_TAG,
    request_body = CreateQuestDto,
    responses(
        (status = 201, description = "Quest created", body = QuestDto),
        (status = 400, description = "Invalid quest data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateQuestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = CreateQuestParam::from_dto(payload)?;
    let quest = QuestService::new(&state.db).create(caller.id(), param).await?;

    Ok((StatusCode::CREATED, Json(quest.into_dto())))
}

/// Get a quest of one of the caller's matches.
#[utoipa::path(
    get,
    path = "/api/quests/{quest_id}/",
    tag = QUEST_TAG,
    params(("quest_id" = i32, Path, description = "ID of the quest")),
    responses(
        (status = 200, description = "The quest", body = QuestDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let quest = QuestService::new(&state.db).get(caller.id(), quest_id).await?;

    Ok((StatusCode::OK, Json(quest.into_dto())))
}

/// Partially update a quest. Serves `PUT` and `PATCH`.
///
/// The update that completes the quest for both participants awards the XP reward to
/// each of them.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `quest_id` - ID of the quest
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated quest
/// - `400 Bad Request` - Invalid fields or a location already used by the match
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Not a quest of the caller's matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/quests/{quest_id}/",
    tag = QUEST_TAG,
    params(("quest_id" = i32, Path, description = "ID of the quest")),
    request_body = UpdateQuestDto,
    responses(
        (status = 200, description = "Updated quest", body = QuestDto),
        (status = 400, description = "Invalid quest data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quest_id): Path<i32>,
    payload: Result<Json<UpdateQuestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = UpdateQuestParam::from_dto(payload)?;
    let quest = QuestService::new(&state.db)
        .update(caller.id(), quest_id, param)
        .await?;

    Ok((StatusCode::OK, Json(quest.into_dto())))
}

/// Delete a quest of one of the caller's matches.
#[utoipa::path(
    delete,
    path = "/api/quests/{quest_id}/",
    tag = QUEST_TAG,
    params(("quest_id" = i32, Path, description = "ID of the quest")),
    responses(
        (status = 204, description = "Quest deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    QuestService::new(&state.db).delete(caller.id(), quest_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave the caller's hint on a quest.
///
/// Also routed as `/api/quests/{quest_id}/hint/`.
///
/// # Returns
/// - `200 OK` - The quest with the caller's hint set
/// - `400 Bad Request` - Missing, blank or overlong hint
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not a participant
/// - `404 Not Found` - No such quest
#[utoipa::path(
    post,
    path = "/api/quests/{quest_id}/post-hint/",
    tag = QUEST_TAG,
    params(("quest_id" = i32, Path, description = "ID of the quest")),
    request_body = HintDto,
    responses(
        (status = 200, description = "Hint stored", body = QuestDto),
        (status = 400, description = "Invalid hint", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn post_hint(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quest_id): Path<i32>,
    payload: Result<Json<HintDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let quest = QuestService::new(&state.db)
        .post_hint(caller.id(), quest_id, payload.hint)
        .await?;

    Ok((StatusCode::OK, Json(quest.into_dto())))
}
