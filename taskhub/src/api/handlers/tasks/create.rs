use axum::{
    debug_handler, extract::State, http::StatusCode, response::IntoResponse, Extension, Json,
};

use taskhub_core::authorization::Identity;
use taskhub_core::tasks::{CreateTaskRequest, Task};

use crate::{api::error::AppError, app_state::SharedAppState};

#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = CreateTaskRequest,
    responses(
    (status = 201, body = Task),
    (status = 401, description = "Access token is missing or invalid"),
    (status = 403, description = "Caller's roles do not allow creating tasks"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
#[debug_handler]
pub async fn create_task_handler(
    State(state): State<SharedAppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = Task::from_request(payload, identity.user_id);
    let task = state.tasks.add_task(task).await?;

    Ok((StatusCode::CREATED, Json(task)))
}
