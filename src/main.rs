mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::quest_generation, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();
    let channel = startup::build_channel_layer(&config)?;
    let places = Arc::new(startup::load_places(&config).await?);

    // Start daily quest generation
    let scheduler_db = db.clone();
    let scheduler_places = places.clone();
    let scheduler_cron = config.quest_cron.clone();
    tokio::spawn(async move {
        if let Err(e) =
            quest_generation::start_scheduler(scheduler_db, scheduler_places, scheduler_cron).await
        {
            tracing::error!("Quest generation scheduler error: {}", e);
        }
    });

    let app = router::router(&config)?.with_state(AppState::new(
        db,
        http_client,
        channel,
        places,
        config.auth0.clone(),
        config.token_valid_days,
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
