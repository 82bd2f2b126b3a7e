use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use taskhub_core::tasks::{Task, UpdateTaskRequest};

use crate::{api::error::AppError, app_state::SharedAppState};

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{task_id}",
    params(
        ("task_id" = Uuid, Path, description = "Id of the task to update")
    ),
    request_body = UpdateTaskRequest,
    responses(
    (status = 200, body = Task),
    (status = 401, description = "Access token is missing or invalid"),
    (status = 403, description = "Caller's roles do not allow updating tasks"),
    (status = 404, description = "Task not found"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
#[debug_handler]
pub async fn update_task_handler(
    State(state): State<SharedAppState>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state
        .tasks
        .update_task(&task_id, &payload)
        .await
        .ok_or(AppError::TaskNotFound)?;

    Ok(Json(task))
}
