use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    engine::quest::Place, error::AppError, service::quest_generation::QuestGenerationService,
};

/// Starts the daily quest generation scheduler
///
/// On every tick, each match without a quest dated today gets up to three new quests.
/// Matches that cannot be planned are skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `places`: Place catalog quests are picked from
/// - `cron`: Six-field cron expression, e.g. `0 0 6 * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    places: Arc<Vec<Place>>,
    cron: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_places = places.clone();

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let places = job_places.clone();

        Box::pin(async move {
            if let Err(e) = generate_daily_quests(&db, &places).await {
                tracing::error!("Error generating daily quests: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Quest generation scheduler started ({})", cron);

    Ok(())
}

async fn generate_daily_quests(db: &DatabaseConnection, places: &[Place]) -> Result<(), AppError> {
    let today = Utc::now().date_naive();

    let created = QuestGenerationService::new(db, places)
        .run_daily(today)
        .await?;

    tracing::info!("Generated {} quests for {}", created, today);

    Ok(())
}
