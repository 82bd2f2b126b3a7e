use axum::{debug_handler, extract::State, response::IntoResponse, Extension, Json};

use taskhub_core::authorization::Identity;
use taskhub_core::tasks::TaskDataVec;

use crate::{api::error::AppError, app_state::SharedAppState};

#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    responses(
    (status = 200, body = TaskDataVec),
    (status = 401, description = "Access token is missing or invalid"),
    (status = 403, description = "Caller's roles do not allow reading tasks"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
#[debug_handler]
pub async fn list_tasks_handler(
    State(state): State<SharedAppState>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = state.tasks.get_tasks_created_by(&identity.user_id).await;
    Ok(Json(tasks))
}
