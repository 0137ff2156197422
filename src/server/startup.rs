//! Construction of the long-lived resources held in [`AppState`](crate::server::state::AppState).

use std::sync::Arc;

use crate::server::{
    channel::{ChannelLayer, InMemoryChannelLayer, RedisChannelLayer},
    config::Config,
    engine::quest::Place,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the channel layer chat events are fanned out through.
///
/// With `REDIS_URL` set the Redis backend is used and its subscription listener is
/// spawned; otherwise events only reach sockets of this process.
///
/// # Returns
/// - `Ok(Arc<dyn ChannelLayer>)` - The selected backend
/// - `Err(AppError::ChannelErr)` - The Redis URL is invalid
pub fn build_channel_layer(config: &Config) -> Result<Arc<dyn ChannelLayer>, AppError> {
    match &config.redis_url {
        Some(redis_url) => {
            let layer = RedisChannelLayer::new(redis_url)?;
            layer.spawn_listener();
            tracing::info!("Using Redis channel layer");

            Ok(Arc::new(layer))
        }
        None => {
            tracing::info!("Using in-memory channel layer");

            Ok(Arc::new(InMemoryChannelLayer::new()))
        }
    }
}

/// Loads the place catalog used for quest generation.
///
/// The file is a JSON array of `{name, type, latitude, longitude}` objects. Without
/// `PLACES_FILE` the catalog is empty and quest generation reports every match as
/// unplannable.
///
/// # Returns
/// - `Ok(Vec<Place>)` - The catalog
/// - `Err(ConfigError::InvalidPlacesFile)` - The file is unreadable or malformed
pub async fn load_places(config: &Config) -> Result<Vec<Place>, AppError> {
    let Some(path) = &config.places_file else {
        tracing::warn!("PLACES_FILE is not set, quest generation is disabled");
        return Ok(Vec::new());
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::InvalidPlacesFile(path.clone(), e.to_string()))?;
    let places = parse_places(&contents)
        .map_err(|e| ConfigError::InvalidPlacesFile(path.clone(), e.to_string()))?;

    tracing::info!("Loaded {} places from {}", places.len(), path);

    Ok(places)
}

fn parse_places(contents: &str) -> Result<Vec<Place>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Creates the HTTP client used for Auth0 requests.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("cupid/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}
