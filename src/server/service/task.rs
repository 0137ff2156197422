use sea_orm::DatabaseConnection;

use crate::server::{
    data::task::TaskRepository,
    error::AppError,
    model::task::{validate_interval, CreateTaskParam, Task, UpdateTaskParam},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task on the caller's calendar
    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, AppError> {
        Ok(TaskRepository::new(self.db).create(param).await?)
    }

    /// Lists the caller's tasks, newest first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Gets one of the caller's tasks. Tasks of other users are reported as missing.
    pub async fn get(&self, user_id: i32, task_id: i32) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_for_user(task_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Applies a partial update to one of the caller's tasks.
    ///
    /// The interval rule is checked against the merged values, so moving only the end
    /// before the stored start is rejected.
    ///
    /// # Returns
    /// - `Ok(Task)` - The updated task
    /// - `Err(AppError::NotFound)` - No such task for this user
    /// - `Err(AppError::BadRequest)` - The merged interval ends before it starts
    pub async fn update(
        &self,
        user_id: i32,
        task_id: i32,
        param: UpdateTaskParam,
    ) -> Result<Task, AppError> {
        let current = self.get(user_id, task_id).await?;

        validate_interval(
            param.scheduled_start_time.or(current.scheduled_start_time),
            param.scheduled_end_time.or(current.scheduled_end_time),
        )?;

        TaskRepository::new(self.db)
            .update(task_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Deletes one of the caller's tasks
    pub async fn delete(&self, user_id: i32, task_id: i32) -> Result<(), AppError> {
        self.get(user_id, task_id).await?;
        TaskRepository::new(self.db).delete(task_id).await?;

        Ok(())
    }
}
