use axum::{
    debug_handler, extract::State, http::StatusCode, response::IntoResponse, Extension, Json,
};
use tracing::debug;

use taskhub_core::authorization::{role, Identity};
use taskhub_core::users::{User, UserProfile};

use crate::api::error::AppError;
use crate::app_state::SharedAppState;
use crate::notification::{self, MailMessage};

#[derive(serde::Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role names to assign; defaults to ["User"] when empty.
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(serde::Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
    (status = 201, body = TokenResponse),
    (status = 400, description = "User already exists or the payload references an unknown role"),
    )
)]
#[debug_handler]
pub async fn register_handler(
    State(state): State<SharedAppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.users.has_user_with_email(&payload.email).await {
        return Err(AppError::UserExists);
    }

    // Accounts registered without explicit roles start as plain users.
    let roles = if payload.roles.is_empty() {
        vec![role::USER.to_string()]
    } else {
        payload.roles
    };
    state
        .auth_service
        .validate_assignable_roles(&roles)
        .map_err(AppError::UnknownRole)?;

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let user = User::new(&payload.username, &payload.email, &password_hash, roles);
    let user = state.users.add_user(user).await?;

    let token = state.token_service.issue(&user)?;

    debug!("Registered user {} <{}>", user.username, user.email);
    notification::send_in_background(state.mailer.clone(), MailMessage::welcome(&user.email));

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
    (status = 200, body = TokenResponse),
    (status = 401, description = "Invalid email or password"),
    )
)]
#[debug_handler]
pub async fn login_handler(
    State(state): State<SharedAppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Same response body whether the email is unknown or the password
    // mismatched, so the endpoint does not leak which accounts exist.
    let Some(user) = state.users.get_user_by_email(&payload.email).await else {
        return Err(AppError::InvalidCredentials);
    };

    let password_matches = bcrypt::verify(&payload.password, &user.password_hash)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    if !password_matches {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.token_service.issue(&user)?;

    debug!("User {} logged in", user.username);
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
    (status = 200, description = "Logout confirmation"),
    (status = 401, description = "Access token is missing or invalid"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn logout_handler() -> impl IntoResponse {
    // Tokens are stateless; logging out means the client drops its copy.
    Json(serde_json::json!({ "message": "Logged out successfully" }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    responses(
    (status = 200, body = UserProfile),
    (status = 401, description = "Access token is missing or invalid"),
    (status = 404, description = "The authenticated account no longer exists"),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
#[debug_handler]
pub async fn profile_handler(
    State(state): State<SharedAppState>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .users
        .get_user(&identity.user_id)
        .await
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(UserProfile::from(user)))
}
