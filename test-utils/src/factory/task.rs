//! Task factory for creating calendar entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let task = TaskFactory::new(&db, user.id)
///     .scheduled(start, end)
///     .free(false)
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    description: String,
    scheduled_start_time: Option<DateTime<Utc>>,
    scheduled_end_time: Option<DateTime<Utc>>,
    is_free: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with an unscheduled, busy task.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the task owner
    ///
    /// # Returns
    /// - `TaskFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            description: format!("Task {}", next_id()),
            scheduled_start_time: None,
            scheduled_end_time: None,
            is_free: false,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the scheduled interval.
    ///
    /// # Arguments
    /// - `start` - Start of the interval
    /// - `end` - End of the interval
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn scheduled(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.scheduled_start_time = Some(start);
        self.scheduled_end_time = Some(end);
        self
    }

    /// Sets whether the interval counts as free time.
    pub fn free(mut self, is_free: bool) -> Self {
        self.is_free = is_free;
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            description: ActiveValue::Set(self.description),
            scheduled_start_time: ActiveValue::Set(self.scheduled_start_time),
            scheduled_end_time: ActiveValue::Set(self.scheduled_end_time),
            is_free: ActiveValue::Set(self.is_free),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values for the given user.
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, user_id).build().await
}
