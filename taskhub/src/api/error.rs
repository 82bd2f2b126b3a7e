use axum::http::StatusCode;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::token::AuthError;

#[derive(Clone, Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthenticated(#[from] AuthError),

    #[error("Access denied")]
    Forbidden,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UserNotFound | AppError::TaskNotFound => StatusCode::NOT_FOUND,
            AppError::UserExists | AppError::UnknownRole(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            return app_error.clone();
        }
        AppError::InternalServerError(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_forbidden_is_403_access_denied() {
        let (status, body) = response_parts(AppError::Forbidden).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, serde_json::json!({ "message": "Access denied" }));
    }

    #[tokio::test]
    async fn test_missing_credential_is_401_not_authorized() {
        let (status, body) = response_parts(AppError::Unauthenticated(AuthError::Unauthorized)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].as_str().unwrap().contains("Not authorized"));
    }

    #[tokio::test]
    async fn test_invalid_token_is_401_not_authorized() {
        let (status, body) = response_parts(AppError::Unauthenticated(AuthError::InvalidToken)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].as_str().unwrap().contains("Not authorized"));
    }

    #[tokio::test]
    async fn test_task_not_found_is_404() {
        let (status, body) = response_parts(AppError::TaskNotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Task not found");
    }

    #[tokio::test]
    async fn test_anyhow_errors_collapse_to_500() {
        let error: AppError = anyhow::anyhow!("boom").into();
        let (status, _) = response_parts(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
