//! Calendar task repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::task::{CreateTaskParam, Task, UpdateTaskParam};

/// Repository providing database operations for calendar tasks.
pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new TaskRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `TaskRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a task.
    ///
    /// # Arguments
    /// - `param` - Validated task fields including the owner
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, DbErr> {
        let now = Utc::now();
        let entity = entity::task::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            description: ActiveValue::Set(param.description),
            scheduled_start_time: ActiveValue::Set(param.scheduled_start_time),
            scheduled_end_time: ActiveValue::Set(param.scheduled_end_time),
            is_free: ActiveValue::Set(param.is_free),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    /// Lists a user's tasks, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.eq(user_id))
            .order_by_desc(entity::task::Column::CreatedAt)
            .order_by_desc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Finds a task owned by a user.
    ///
    /// # Arguments
    /// - `task_id` - ID of the task
    /// - `user_id` - Expected owner
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Task found and owned by the user
    /// - `Ok(None)` - Unknown task or owned by someone else
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_user(&self, task_id: i32, user_id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_by_id(task_id)
            .filter(entity::task::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Task::from_entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - The updated task
    /// - `Ok(None)` - No task with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, task_id: i32, param: UpdateTaskParam) -> Result<Option<Task>, DbErr> {
        let Some(entity) = entity::prelude::Task::find_by_id(task_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::task::ActiveModel = entity.into();
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(start) = param.scheduled_start_time {
            active.scheduled_start_time = ActiveValue::Set(Some(start));
        }
        if let Some(end) = param.scheduled_end_time {
            active.scheduled_end_time = ActiveValue::Set(Some(end));
        }
        if let Some(is_free) = param.is_free {
            active.is_free = ActiveValue::Set(is_free);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Task::from_entity(entity)))
    }

    /// Deletes a task.
    ///
    /// # Returns
    /// - `Ok(true)` - Task deleted
    /// - `Ok(false)` - No task with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, task_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(task_id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists busy tasks of several users that overlap a time range.
    ///
    /// Only tasks with both times set and `is_free = false` count as busy.
    ///
    /// # Arguments
    /// - `user_ids` - Owners to include
    /// - `from` - Inclusive start of the range
    /// - `to` - Exclusive end of the range
    ///
    /// # Returns
    /// - `Ok(Vec<Task>)` - Overlapping busy tasks, ordered by start time
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_busy_between(
        &self,
        user_ids: &[i32],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Task>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.is_in(user_ids.to_vec()))
            .filter(entity::task::Column::IsFree.eq(false))
            .filter(entity::task::Column::ScheduledStartTime.lt(to))
            .filter(entity::task::Column::ScheduledEndTime.gt(from))
            .order_by_asc(entity::task::Column::ScheduledStartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }
}
