use std::sync::Arc;

use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    channel::InMemoryChannelLayer,
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard},
    service::auth::{generate_token, hash_token},
    state::AppState,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        Arc::new(InMemoryChannelLayer::new()),
        Arc::new(Vec::new()),
        None,
        365,
    )
}

fn authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn accepts_bearer_and_token_schemes() {
    assert_eq!(bearer_token(&authorization("Bearer abc")).unwrap(), "abc");
    assert_eq!(bearer_token(&authorization("Token abc")).unwrap(), "abc");
    assert_eq!(bearer_token(&authorization("bearer  abc ")).unwrap(), "abc");
}

#[test]
fn rejects_missing_or_malformed_header() {
    assert!(matches!(
        bearer_token(&HeaderMap::new()),
        Err(AuthError::MissingCredentials)
    ));
    assert!(matches!(
        bearer_token(&authorization("Basic dXNlcjpwYXNz")),
        Err(AuthError::MissingCredentials)
    ));
    assert!(matches!(
        bearer_token(&authorization("Bearer")),
        Err(AuthError::MissingCredentials)
    ));
}
