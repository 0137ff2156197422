//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for identity provider requests
//! - Channel layer that fans chat events out to connected sockets
//! - Place catalog used for quest generation
//! - Auth0 settings and the cached signing keys

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    channel::ChannelLayer, config::Auth0Config, engine::quest::Place, service::auth0::JwksCache,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - the channel layer, places and JWKS cache are reference counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the Auth0 JWKS and `/userinfo` requests.
    pub http_client: reqwest::Client,

    /// Pub/sub layer shared by the REST message endpoint and the chat sockets.
    pub channel: Arc<dyn ChannelLayer>,

    /// Place catalog loaded from `PLACES_FILE`, empty when unset.
    pub places: Arc<Vec<Place>>,

    /// Auth0 tenant, when external bearer JWTs are accepted.
    pub auth0: Option<Arc<Auth0Config>>,

    /// Signing keys of the Auth0 tenant, refreshed hourly.
    pub jwks: JwksCache,

    /// Lifetime of newly issued API tokens.
    pub token_valid_days: i64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for identity provider requests
    /// - `channel` - Channel layer backend
    /// - `places` - Place catalog
    /// - `auth0` - Optional Auth0 tenant settings
    /// - `token_valid_days` - Lifetime of issued tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty JWKS cache
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        channel: Arc<dyn ChannelLayer>,
        places: Arc<Vec<Place>>,
        auth0: Option<Auth0Config>,
        token_valid_days: i64,
    ) -> Self {
        Self {
            db,
            http_client,
            channel,
            places,
            auth0: auth0.map(Arc::new),
            jwks: JwksCache::new(),
            token_valid_days,
        }
    }
}
