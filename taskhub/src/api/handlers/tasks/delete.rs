use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::{api::error::AppError, app_state::SharedAppState};

#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{task_id}",
    params(
        ("task_id" = Uuid, Path, description = "Id of the task to delete")
    ),
    responses(
    (status = 200, description = "Task removed"),
    (status = 401, description = "Access token is missing or invalid"),
    (status = 403, description = "Caller's roles do not allow deleting tasks"),
    (status = 404, description = "Task not found"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
#[debug_handler]
pub async fn delete_task_handler(
    State(state): State<SharedAppState>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let task = state
        .tasks
        .remove_task(&task_id)
        .await
        .ok_or(AppError::TaskNotFound)?;

    debug!("Removed task {} ({})", task.id, task.title);
    Ok(Json(serde_json::json!({ "message": "Task removed" })))
}
