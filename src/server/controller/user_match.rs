use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        quest::GeneratedQuestsDto,
        user_match::{CreateMatchDto, MatchDto, RateMatchDto, UpdateMatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user_match::UpdateMatchParam,
        service::{quest_generation::QuestGenerationService, user_match::MatchService},
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// List the caller's matches, most recently matched first.
#[utoipa::path(
    get,
    path = "/api/matches/",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Caller's matches", body = Vec<MatchDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let matches = MatchService::new(&state.db).get_all(caller.id()).await?;
    let matches: Vec<MatchDto> = matches.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(matches)))
}

/// Match the caller with another user.
///
/// The caller becomes `user1` and the match's chat is opened in the same transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - The user to match with
///
/// # Returns
/// - `201 Created` - The new match
/// - `400 Bad Request` - Self match, unknown user or an existing match between the pair
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/matches/",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid match", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let user_match = MatchService::new(&state.db)
        .create(caller.id(), payload.user2_id)
        .await?;

    Ok((StatusCode::CREATED, Json(user_match.into_dto())))
}

/// Get one of the caller's matches.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}/",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "ID of the match")),
    responses(
        (status = 200, description = "The match", body = MatchDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let user_match = MatchService::new(&state.db)
        .get(caller.id(), match_id)
        .await?;

    Ok((StatusCode::OK, Json(user_match.into_dto())))
}

/// Partially update statuses and ratings of a match. Serves `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/api/matches/{match_id}/",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "ID of the match")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Updated match", body = MatchDto),
        (status = 400, description = "Rating out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
    payload: Result<Json<UpdateMatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = UpdateMatchParam::from_dto(payload)?;
    let user_match = MatchService::new(&state.db)
        .update(caller.id(), match_id, param)
        .await?;

    Ok((StatusCode::OK, Json(user_match.into_dto())))
}

/// Delete a match together with its chat, messages and quests.
#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}/",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "ID of the match")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    MatchService::new(&state.db)
        .delete(caller.id(), match_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rate the partner of a match.
///
/// # Access Control
/// - Only the two participants may rate; each writes their own side
///
/// # Returns
/// - `200 OK` - The match with the new rating
/// - `400 Bad Request` - Missing, non-integer or out of range rating
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not a participant
/// - `404 Not Found` - No such match
#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/rate/",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "ID of the match")),
    request_body = RateMatchDto,
    responses(
        (status = 200, description = "Rating stored", body = MatchDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn rate_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
    payload: Result<Json<RateMatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let user_match = MatchService::new(&state.db)
        .rate(caller.id(), match_id, payload.rating.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(user_match.into_dto())))
}

/// Get or create the caller's match with a user.
///
/// # Returns
/// - `200 OK` - The pair was already matched
/// - `201 Created` - A new match and chat were created
/// - `400 Bad Request` - Self match
/// - `404 Not Found` - No such user
#[utoipa::path(
    put,
    path = "/api/matches/with/{user_id}/",
    tag = MATCH_TAG,
    params(("user_id" = i32, Path, description = "ID of the other user")),
    responses(
        (status = 200, description = "Existing match", body = MatchDto),
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Cannot match with yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn match_with(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let (user_match, created) = MatchService::new(&state.db)
        .match_with(caller.id(), user_id)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(user_match.into_dto())))
}

/// Generate today's quests for one of the caller's matches.
///
/// Picks the first two-hour slot both participants have free between 07:00 and 22:00
/// and up to three places closest to both homes that the match has not used yet.
///
/// # Returns
/// - `201 Created` - The slot and the created quests
/// - `400 Bad Request` - Missing home location, no free slot, or no places configured
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Not one of the caller's matches
#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/generate-quests/",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "ID of the match")),
    responses(
        (status = 201, description = "Quests generated", body = GeneratedQuestsDto),
        (status = 400, description = "Match cannot be planned", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_quests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let generated = QuestGenerationService::new(&state.db, &state.places)
        .generate_for_match(caller.id(), match_id, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::CREATED, Json(generated.into_dto())))
}
