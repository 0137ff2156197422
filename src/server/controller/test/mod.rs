use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    channel::InMemoryChannelLayer,
    router::{api_routes, auth_routes},
    service::auth::{generate_token, hash_token},
    state::AppState,
};
use test_utils::factory;

mod auth;

fn app(db: &DatabaseConnection) -> Router {
    auth_routes().merge(api_routes()).with_state(AppState::new(
        db.clone(),
        reqwest::Client::new(),
        Arc::new(InMemoryChannelLayer::new()),
        Arc::new(Vec::new()),
        None,
        365,
    ))
}

/// Stores a token for `user_id` and returns its plaintext.
async fn token_for(db: &DatabaseConnection, user_id: i32) -> String {
    let plaintext = generate_token();
    factory::expiring_token::TokenFactory::new(db, user_id)
        .key_hash(hash_token(&plaintext))
        .build()
        .await
        .unwrap();

    plaintext
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and returns the status with the JSON body, `Value::Null` when empty.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
