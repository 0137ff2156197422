use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one that is not `Bearer <token>` / `Token <token>`.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate` challenge.
    #[error("Authentication credentials were not provided")]
    MissingCredentials,

    /// The presented token is unknown, revoked or expired.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate` challenge.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token is valid but its user has been deactivated.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate` challenge.
    #[error("User {0} is inactive")]
    UserInactive(i32),

    /// An Auth0 bearer JWT failed validation or its key could not be resolved.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate` challenge.
    #[error("Invalid identity provider token: {0}")]
    Jwt(String),

    /// Login with an unknown identifier or a wrong password.
    ///
    /// Results in a 400 Bad Request response so that login failures do not reveal
    /// which accounts exist.
    #[error("Unable to log in with provided credentials")]
    InvalidCredentials,

    /// Login with the right password for a deactivated account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User account is disabled")]
    AccountDisabled,

    /// The caller is authenticated but not allowed to act on the resource.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason for the denial
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingCredentials` / `InvalidToken` / `UserInactive` / `Jwt` → 401 Unauthorized with a
///   `WWW-Authenticate: Bearer` challenge
/// - `InvalidCredentials` / `AccountDisabled` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredentials => unauthorized("Authentication credentials were not provided."),
            Self::InvalidToken | Self::UserInactive(_) | Self::Jwt(_) => {
                unauthorized("Invalid or expired token.")
            }
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Unable to log in with provided credentials.".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "User account is disabled.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
