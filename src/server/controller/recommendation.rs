use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, recommendation::RecommendationDto, user_match::MatchDto},
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::recommendation::RecommendationService, state::AppState,
    },
};

/// Tag for grouping recommendation endpoints in OpenAPI documentation
pub static SINGLES_TAG: &str = "singles";

/// List up to five recommended singles for the caller.
///
/// Candidates are ranked by the cosine similarity of their interest and age vector to
/// the caller's, with ratings from past matches shifting the caller's vector.
#[utoipa::path(
    get,
    path = "/api/match/singles/",
    tag = SINGLES_TAG,
    responses(
        (status = 200, description = "Ranked candidates", body = Vec<RecommendationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_singles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let singles = RecommendationService::new(&state.db)
        .singles(caller.id())
        .await?;
    let singles: Vec<RecommendationDto> = singles.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(singles)))
}

/// Match the caller with their best candidate.
///
/// # Returns
/// - `201 Created` - The new match; both profiles are flagged as matched
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No candidate available
#[utoipa::path(
    post,
    path = "/api/match/singles/",
    tag = SINGLES_TAG,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No candidate available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn auto_match(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let user_match = RecommendationService::new(&state.db)
        .auto_match(caller.id())
        .await?;

    Ok((StatusCode::CREATED, Json(user_match.into_dto())))
}
