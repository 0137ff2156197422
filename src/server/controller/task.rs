use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::task::{CreateTaskParam, UpdateTaskParam},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// List the caller's calendar tasks, newest first.
#[utoipa::path(
    get,
    path = "/api/tasks/",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Caller's tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let tasks = TaskService::new(&state.db).get_all(caller.id()).await?;
    let tasks: Vec<TaskDto> = tasks.into_iter().map(|task| task.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks)))
}

/// Create a calendar task for the caller.
///
/// # Returns
/// - `201 Created` - The new task
/// - `400 Bad Request` - Blank description, or the end is before the start
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/tasks/",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = CreateTaskParam::from_dto(caller.id(), payload)?;
    let task = TaskService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get one of the caller's tasks.
#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}/",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "ID of the task")),
    responses(
        (status = 200, description = "The task", body = TaskDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    let task = TaskService::new(&state.db).get(caller.id(), task_id).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Partially update one of the caller's tasks. Serves `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/api/tasks/{task_id}/",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "ID of the task")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
    payload: Result<Json<UpdateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;
    let Json(payload) = payload?;

    let param = UpdateTaskParam::from_dto(payload)?;
    let task = TaskService::new(&state.db)
        .update(caller.id(), task_id, param)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete one of the caller's tasks.
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}/",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "ID of the task")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).require().await?;

    TaskService::new(&state.db).delete(caller.id(), task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
