use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        preference::{
            CreatePreferenceDto, CreateUserPreferenceDto, PreferenceDto, UserPreferenceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::preference::{PreferenceService, UserPreferenceService},
        state::AppState,
    },
};

/// Tag for grouping preference endpoints in OpenAPI documentation
pub static PREFERENCE_TAG: &str = "preference";

/// List the preference catalog ordered by name. No authentication required.
#[utoipa::path(
    get,
    path = "/api/preferences/",
    tag = PREFERENCE_TAG,
    responses(
        (status = 200, description = "All preferences", body = Vec<PreferenceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_preferences(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let preferences = PreferenceService::new(&state.db).get_all().await?;
    let preferences: Vec<PreferenceDto> = preferences.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(preferences)))
}

/// Add a preference to the catalog. No authentication required.
#[utoipa::path(
    post,
    path = "/api/preferences/",
    tag = PREFERENCE_TAG,
    request_body = CreatePreferenceDto,
    responses(
        (status = 201, description = "Preference created", body = PreferenceDto),
        (status = 400, description = "Blank, overlong or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_preference(
    State(state): State<AppState>,
    payload: Result<Json<CreatePreferenceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let preference = PreferenceService::new(&state.db)
        .create(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(preference.into_dto())))
}

/// List the caller's preferences in the order they were attached.
#[utoipa::path(
    get,
    path = "/api/user-preferences/",
    tag = PREFERENCE_TAG,
    responses(
        (status = 200, description = "Caller's preferences", body = Vec<UserPreferenceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let links = UserPreferenceService::new(&state.db)
        .get_all(caller.id())
        .await?;
    let links: Vec<UserPreferenceDto> = links.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(links)))
}

/// Attach a preference to the caller.
///
/// Attaching a preference twice returns the existing link.
///
/// # Returns
/// - `201 Created` - The link
/// - `400 Bad Request` - Unknown preference
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/user-preferences/",
    tag = PREFERENCE_TAG,
    request_body = CreateUserPreferenceDto,
    responses(
        (status = 201, description = "Preference attached", body = UserPreferenceDto),
        (status = 400, description = "Unknown preference", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_user_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserPreferenceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let link = UserPreferenceService::new(&state.db)
        .add(caller.id(), payload.preference_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

/// Detach a preference from the caller.
#[utoipa::path(
    delete,
    path = "/api/user-preferences/{preference_id}/",
    tag = PREFERENCE_TAG,
    params(("preference_id" = i32, Path, description = "ID of the preference")),
    responses(
        (status = 204, description = "Preference detached"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Preference not attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_user_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(preference_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    UserPreferenceService::new(&state.db)
        .remove(caller.id(), preference_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
