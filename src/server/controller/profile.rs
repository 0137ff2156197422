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
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::profile::UpdateProfileParam,
        service::profile::ProfileService, state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the caller's profile.
///
/// A missing profile row is created on first access.
#[utoipa::path(
    get,
    path = "/api/profile/",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let profile = ProfileService::new(&state.db).get_own(caller.id()).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the caller's profile.
///
/// Serves both `PUT` and `PATCH`; omitted fields keep their value.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Writable profile fields
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Invalid URL, date of birth or coordinates
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/profile/",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = UpdateProfileParam::from_dto(payload, Utc::now().date_naive())?;
    let profile = ProfileService::new(&state.db)
        .update(caller.id(), param)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get the profile of a user the caller is matched with.
///
/// # Access Control
/// - The caller and the target must share a match, in either direction
///
/// # Returns
/// - `200 OK` - The target's profile
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - The users are not matched
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/profiles/{user_id}/",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "The user's profile", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not matched with this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let profile = ProfileService::new(&state.db)
        .get_other(caller.id(), user_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
