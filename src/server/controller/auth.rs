use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{DetailDto, ErrorDto},
        auth::{AuthResponseDto, LoginDto, RegisterDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with its profile and settings, attaches the requested preferences
/// and issues a first API token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Credentials and optional profile fields
///
/// # Returns
/// - `201 Created` - The token and the new profile
/// - `400 Bad Request` - Invalid or duplicate credentials, bad profile fields or
///   unknown preference IDs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register/",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = RegisterParam::from_dto(payload, Utc::now().date_naive())?;

    let session = AuthService::new(&state.db, state.token_valid_days)
        .register(param)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in with email or phone number and password.
///
/// # Returns
/// - `200 OK` - A new token and the caller's profile
/// - `400 Bad Request` - Missing identifier, wrong credentials or disabled account
#[utoipa::path(
    post,
    path = "/api/auth/login/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = LoginParam::from_dto(payload)?;

    let session = AuthService::new(&state.db, state.token_valid_days)
        .login(param)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Revoke the token that authenticated this request.
///
/// Requests authenticated with an Auth0 JWT have no stored token to revoke and
/// succeed without changes.
#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token revoked", body = DetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    if let Some(token_id) = caller.token_id {
        AuthService::new(&state.db, state.token_valid_days)
            .logout(token_id)
            .await?;
    }

    Ok((
        StatusCode::OK,
        Json(DetailDto {
            detail: "Successfully logged out.".to_string(),
        }),
    ))
}

/// List the caller's API tokens, newest first.
#[utoipa::path(
    get,
    path = "/api/auth/tokens/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller's tokens", body = Vec<TokenDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tokens(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let tokens = AuthService::new(&state.db, state.token_valid_days)
        .get_tokens(caller.id())
        .await?;

    let tokens: Vec<TokenDto> = tokens.into_iter().map(|token| token.into_dto()).collect();

    Ok((StatusCode::OK, Json(tokens)))
}
