use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        settings::{SettingsDto, UpdateSettingsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::settings::UpdateSettingsParam,
        service::settings::SettingsService, state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get the caller's mode settings, creating the defaults on first access.
#[utoipa::path(
    get,
    path = "/api/settings/",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Caller's settings", body = SettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let settings = SettingsService::new(&state.db).get(caller.id()).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Partially update the caller's mode settings. Serves `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/api/settings/",
    tag = SETTINGS_TAG,
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Updated settings", body = SettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateSettingsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let settings = SettingsService::new(&state.db)
        .update(caller.id(), UpdateSettingsParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
