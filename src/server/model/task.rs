//! Calendar task domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    server::error::AppError,
};

/// A block of time on a user's calendar.
///
/// Busy tasks (`is_free == false`) constrain quest scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            user_id: self.user_id,
            description: self.description,
            scheduled_start_time: self.scheduled_start_time,
            scheduled_end_time: self.scheduled_end_time,
            is_free: self.is_free,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            description: entity.description,
            scheduled_start_time: entity.scheduled_start_time,
            scheduled_end_time: entity.scheduled_end_time,
            is_free: entity.is_free,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a task owned by `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskParam {
    pub user_id: i32,
    pub description: String,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub is_free: bool,
}

impl CreateTaskParam {
    /// Validates a create request.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new task
    /// - `dto` - The request body
    ///
    /// # Returns
    /// - `Ok(CreateTaskParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank description or an end before the start
    pub fn from_dto(user_id: i32, dto: CreateTaskDto) -> Result<Self, AppError> {
        let description = validate_description(dto.description)?;
        validate_interval(dto.scheduled_start_time, dto.scheduled_end_time)?;

        Ok(Self {
            user_id,
            description,
            scheduled_start_time: dto.scheduled_start_time,
            scheduled_end_time: dto.scheduled_end_time,
            is_free: dto.is_free,
        })
    }
}

/// Partial task update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTaskParam {
    pub description: Option<String>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub is_free: Option<bool>,
}

impl UpdateTaskParam {
    /// Validates the fields present in an update request.
    ///
    /// The interval check against the stored values happens in the service.
    pub fn from_dto(dto: UpdateTaskDto) -> Result<Self, AppError> {
        Ok(Self {
            description: dto.description.map(validate_description).transpose()?,
            scheduled_start_time: dto.scheduled_start_time,
            scheduled_end_time: dto.scheduled_end_time,
            is_free: dto.is_free,
        })
    }
}

fn validate_description(description: String) -> Result<String, AppError> {
    if description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "description: this field may not be blank".to_string(),
        ));
    }
    Ok(description)
}

/// Rejects an interval whose end lies before its start.
pub fn validate_interval(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(AppError::BadRequest(
                "scheduled_end_time: must not be before scheduled_start_time".to_string(),
            ));
        }
    }
    Ok(())
}
