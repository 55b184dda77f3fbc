// src/presentation/http/controllers/tasks.rs
use crate::application::{
    commands::tasks::{CreateTaskCommand, DeleteTaskCommand, UpdateTaskCommand},
    dto::TaskDto,
    error::ApplicationError,
    queries::tasks::GetTaskByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    responses(
        (status = 200, description = "All tasks.", body = Vec<TaskDto>)
    ),
    tag = "Tasks"
)]
pub async fn list_tasks(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TaskDto>>> {
    state
        .services
        .task_queries
        .list_tasks()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task.", body = TaskDto),
        (status = 404, description = "Task was not found.", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn get_task(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TaskDto>> {
    state
        .services
        .task_queries
        .get_task_by_id(GetTaskByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created.", body = TaskDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Owning user was not found.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateTaskRequest>,
) -> HttpResult<(StatusCode, Json<TaskDto>)> {
    let command = CreateTaskCommand::builder()
        .user_id(payload.user_id)
        .title(payload.title)
        .content(payload.content)
        .priority(payload.priority)
        .build()
        .map_err(ApplicationError::validation)
        .into_http()?;

    state
        .services
        .task_commands
        .create_task(command)
        .await
        .into_http()
        .map(|task| (StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated.", body = StatusResponse),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Task was not found.", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn update_task(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<UpdateTaskRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = UpdateTaskCommand {
        id,
        title: payload.title,
        content: payload.content,
        priority: payload.priority,
    };

    state
        .services
        .task_commands
        .update_task(command)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted.", body = StatusResponse),
        (status = 404, description = "Task was not found.", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn delete_task(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .task_commands
        .delete_task(DeleteTaskCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
