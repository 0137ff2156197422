//! Bearer token authentication.
//!
//! Every protected route resolves the caller through [`AuthGuard`]. Opaque API tokens are
//! checked first; when Auth0 is configured a token that is not a known API token but has
//! the shape of a JWT is validated against the tenant instead.

use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{
        auth::AuthService,
        auth0::{looks_like_jwt, Auth0Service},
    },
    state::AppState,
};

/// Schemes accepted in the `Authorization` header.
const SCHEMES: [&str; 2] = ["Bearer", "Token"];

/// The resolved caller of a request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Stored token that authenticated the request; `None` for Auth0 JWTs.
    pub token_id: Option<i32>,
}

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Resolves the caller from the `Authorization` header.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The active caller
    /// - `Err(AuthError::MissingCredentials)` - No header, or an unsupported scheme
    /// - `Err(AuthError::InvalidToken)` - Unknown, revoked or expired token
    /// - `Err(AuthError::UserInactive)` - The token's user is deactivated
    /// - `Err(AuthError::Jwt)` - An Auth0 token failed validation
    pub async fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let token = bearer_token(self.headers)?;

        authenticate_token(self.state, token).await
    }
}

/// Extracts the token from `Authorization: Bearer <token>` or `Authorization: Token <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingCredentials)?;
    let token = token.trim();

    if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) || token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}

/// Resolves a raw token to its user.
///
/// Shared by the header guard and the chat socket, which receives its token in the
/// query string.
///
/// # Arguments
/// - `state` - Application state
/// - `token` - API token or Auth0 JWT
///
/// # Returns
/// - `Ok(AuthenticatedUser)` - The active caller
/// - `Err(AppError::AuthErr)` - The token was rejected
pub async fn authenticate_token(
    state: &AppState,
    token: &str,
) -> Result<AuthenticatedUser, AppError> {
    let result = AuthService::new(&state.db, state.token_valid_days)
        .verify_token(token)
        .await;

    match result {
        Ok((user, stored)) => Ok(AuthenticatedUser {
            user,
            token_id: Some(stored.id),
        }),
        Err(AppError::AuthErr(AuthError::InvalidToken)) => {
            let Some(auth0) = state.auth0.as_deref().filter(|_| looks_like_jwt(token)) else {
                return Err(AuthError::InvalidToken.into());
            };

            let user = Auth0Service::new(&state.db, &state.http_client, auth0, &state.jwks)
                .authenticate(token)
                .await?;

            Ok(AuthenticatedUser {
                user,
                token_id: None,
            })
        }
        Err(e) => Err(e),
    }
}
